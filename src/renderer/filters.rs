// Case conversion filters for project names
pub use cruet::case::{
    kebab::to_kebab_case, pascal::to_pascal_case, screaming_snake::to_screaming_snake_case,
    snake::to_snake_case,
};
