//! CODEOWNERS line classification and block segmentation.

mod block;
mod lexer;
mod moniker;

pub use block::{Block, blocks, find_block_end};
pub use lexer::{
    is_blank_line, is_comment_line, is_moniker_line, is_moniker_or_source_line,
    is_source_path_owner_line, parse_labels, parse_owners, parse_source_path,
};
pub use moniker::{MISSING_FOLDER_TOKEN, Moniker, UnknownMoniker};
