//! ID prefix constants.
//!
//! Every entity id is `<prefix>-<8 hex chars>`, generated by the database.

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_HOUSE: &str = "hse";
pub const PREFIX_ITEM: &str = "itm";
pub const PREFIX_RECIPE: &str = "rcp";
pub const PREFIX_INGREDIENT: &str = "ing";
pub const PREFIX_SHOPPING_LIST: &str = "shl";
pub const PREFIX_SHOPPING_LINE: &str = "sli";
pub const PREFIX_CHORE: &str = "chr";
pub const PREFIX_CHORE_COMPLETION: &str = "chc";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_USER,
    PREFIX_HOUSE,
    PREFIX_ITEM,
    PREFIX_RECIPE,
    PREFIX_INGREDIENT,
    PREFIX_SHOPPING_LIST,
    PREFIX_SHOPPING_LINE,
    PREFIX_CHORE,
    PREFIX_CHORE_COMPLETION,
];
