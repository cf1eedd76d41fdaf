//! Block segmentation for CODEOWNERS files.
//!
//! A block is a run of moniker and source path/owner lines that the linter
//! verifies as a unit. Blocks end at the first source path/owner line or at
//! the line before the next blank line, whichever comes first.

use super::lexer::{is_blank_line, is_moniker_or_source_line, is_source_path_owner_line};

/// A contiguous block of CODEOWNERS lines.
///
/// `start` and `end` are 0-based, inclusive indices into the file's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    /// The block's lines, borrowed from the file.
    pub fn lines<'a>(&self, file_lines: &'a [String]) -> &'a [String] {
        &file_lines[self.start..=self.end]
    }

    /// Renders the block back to its raw text, newline-joined.
    pub fn raw_text(&self, file_lines: &[String]) -> String {
        self.lines(file_lines).join("\n")
    }
}

/// Finds the end of the block starting at `start`.
///
/// If the starting line is itself a source path/owner line the block is that
/// single line. Otherwise the scan moves forward until a blank line (block
/// ends on the previous line), a source path/owner line (block ends on that
/// line), or end of file. Comment lines inside the run do not end the block.
pub fn find_block_end(start: usize, lines: &[String]) -> usize {
    debug_assert!(start < lines.len());
    if is_source_path_owner_line(&lines[start]) {
        return start;
    }
    let mut current = start + 1;
    while current < lines.len() {
        let line = &lines[current];
        if is_blank_line(line) {
            return current - 1;
        }
        if is_source_path_owner_line(line) {
            return current;
        }
        current += 1;
    }
    lines.len() - 1
}

/// Segments a file into its blocks, in order.
///
/// Lines between blocks (blanks and plain comments) belong to no block.
pub fn blocks(lines: &[String]) -> Vec<Block> {
    let mut found = Vec::new();
    let mut current = 0;
    while current < lines.len() {
        if is_moniker_or_source_line(&lines[current]) {
            let end = find_block_end(current, lines);
            log::trace!("block spans lines {}..={}", current + 1, end + 1);
            found.push(Block { start: current, end });
            current = end + 1;
        } else {
            current += 1;
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn source_line_is_its_own_block() {
        let lines = lines("/sdk/storage/ @owner1 @owner2");
        assert_eq!(find_block_end(0, &lines), 0);
    }

    #[test]
    fn block_ends_on_source_line() {
        let lines = lines(
            "# PRLabel: %Storage\n\
             /sdk/storage/ @owner1\n\
             /sdk/tables/ @owner2",
        );
        assert_eq!(find_block_end(0, &lines), 1);
    }

    #[test]
    fn block_ends_before_blank_line() {
        let lines = lines(
            "# ServiceLabel: %Storage\n\
             # ServiceOwners: @owner1\n\
             \n\
             /sdk/storage/ @owner1",
        );
        assert_eq!(find_block_end(0, &lines), 1);
    }

    #[test]
    fn block_runs_to_end_of_file() {
        let lines = lines(
            "# ServiceLabel: %Storage\n\
             # ServiceOwners: @owner1",
        );
        assert_eq!(find_block_end(0, &lines), 1);
    }

    #[test]
    fn comments_inside_block_do_not_end_it() {
        let lines = lines(
            "# PRLabel: %Storage\n\
             # an explanatory comment\n\
             /sdk/storage/ @owner1",
        );
        assert_eq!(find_block_end(0, &lines), 2);
    }

    #[test]
    fn segments_whole_file() {
        let lines = lines(
            "# Top-of-file commentary\n\
             \n\
             # PRLabel: %Storage\n\
             /sdk/storage/ @owner1\n\
             \n\
             # ServiceLabel: %Tables\n\
             # ServiceOwners: @owner2\n\
             \n\
             /sdk/core/ @owner3",
        );
        let blocks = blocks(&lines);
        assert_eq!(
            blocks,
            vec![
                Block { start: 2, end: 3 },
                Block { start: 5, end: 6 },
                Block { start: 8, end: 8 },
            ]
        );
    }

    #[test]
    fn block_raw_text_round_trips() {
        let file = "# ServiceLabel: %Storage\n\
                    # ServiceOwners: @owner1\n\
                    \n\
                    /sdk/core/ @owner2";
        let file_lines = lines(file);
        let rendered: Vec<String> = blocks(&file_lines)
            .iter()
            .map(|b| b.raw_text(&file_lines))
            .collect();
        assert_eq!(
            rendered,
            vec![
                "# ServiceLabel: %Storage\n# ServiceOwners: @owner1".to_string(),
                "/sdk/core/ @owner2".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_moniker_shape_still_segments_into_a_block() {
        let lines = lines(
            "#/<NotInRepoo>/ @owner1\n\
             # ServiceLabel: %Storage",
        );
        let found = blocks(&lines);
        assert_eq!(found, vec![Block { start: 0, end: 1 }]);
    }
}
