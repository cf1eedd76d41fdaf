//! Moniker recognition for CODEOWNERS metadata lines.
//!
//! Monikers are comment lines that annotate a block with auxiliary
//! owner or label information, e.g. `# ServiceLabel: %Storage` or
//! `# /<NotInRepo>/ @owner`.

use std::fmt::{self, Display};
use thiserror::Error;

/// The literal token used for the missing-folder moniker.
pub const MISSING_FOLDER_TOKEN: &str = "/<NotInRepo>/";

/// A recognized metadata moniker.
///
/// The set is closed: adding a moniker means extending this enum, and the
/// compiler enforces that every match over it is updated in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moniker {
    /// `# AzureSdkOwners:` - owners from the Azure SDK team for a service.
    AzureSdkOwners,
    /// `# /<NotInRepo>/` - service owners for a folder that doesn't exist yet.
    MissingFolder,
    /// `# PRLabel:` - label applied to pull requests touching the source path.
    PRLabel,
    /// `# ServiceLabel:` - label identifying the service the block belongs to.
    ServiceLabel,
    /// `# ServiceOwners:` - owners for the service, independent of source paths.
    ServiceOwners,
}

impl Moniker {
    /// All monikers, in the order they're documented.
    pub const ALL: [Moniker; 5] = [
        Moniker::AzureSdkOwners,
        Moniker::MissingFolder,
        Moniker::PRLabel,
        Moniker::ServiceLabel,
        Moniker::ServiceOwners,
    ];

    /// Returns the keyword as it appears in a CODEOWNERS file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Moniker::AzureSdkOwners => "AzureSdkOwners",
            Moniker::MissingFolder => MISSING_FOLDER_TOKEN,
            Moniker::PRLabel => "PRLabel",
            Moniker::ServiceLabel => "ServiceLabel",
            Moniker::ServiceOwners => "ServiceOwners",
        }
    }

    /// Returns true if the moniker carries owners rather than labels.
    pub fn carries_owners(&self) -> bool {
        matches!(
            self,
            Moniker::AzureSdkOwners | Moniker::MissingFolder | Moniker::ServiceOwners
        )
    }

    /// Returns true if the moniker carries labels.
    pub fn carries_labels(&self) -> bool {
        matches!(self, Moniker::PRLabel | Moniker::ServiceLabel)
    }

    /// Parses the moniker from a CODEOWNERS line, if the line is a moniker line.
    ///
    /// The line must be a comment; its content (after the `#`, trimmed) must
    /// start with `<Keyword>:` for the keyword monikers, or with the literal
    /// `/<NotInRepo>/` token (colon optional) for [`Moniker::MissingFolder`].
    ///
    /// A comment whose content has the `/<...>/` bracket shape but names an
    /// unknown keyword is a defect in the file that the moniker table cannot
    /// explain, so it is reported as [`UnknownMoniker`] rather than being
    /// silently treated as a comment.
    pub fn parse_line(line: &str) -> Result<Option<Moniker>, UnknownMoniker> {
        let trimmed = line.trim();
        if !trimmed.starts_with('#') {
            return Ok(None);
        }
        let content = trimmed.trim_start_matches('#').trim_start();

        if content.starts_with(MISSING_FOLDER_TOKEN) {
            return Ok(Some(Moniker::MissingFolder));
        }

        for moniker in Moniker::ALL {
            if moniker == Moniker::MissingFolder {
                continue;
            }
            if let Some(rest) = content.strip_prefix(moniker.as_str())
                && rest.starts_with(':')
            {
                return Ok(Some(moniker));
            }
        }

        // Anything bracketed like /<Keyword>/ that isn't the missing-folder
        // token is a corrupted moniker, not a comment.
        if let Some(bracketed) = content.strip_prefix("/<")
            && let Some(end) = bracketed.find(">/")
        {
            return Err(UnknownMoniker {
                keyword: format!("/<{}>/", &bracketed[..end]),
            });
        }

        Ok(None)
    }
}

impl Display for Moniker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A moniker-shaped token that doesn't match any known moniker.
///
/// This indicates the file (or the moniker table) is corrupted and is treated
/// as fatal, unlike ordinary lint findings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized moniker '{keyword}'")]
pub struct UnknownMoniker {
    /// The unrecognized keyword as it appeared in the file.
    pub keyword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keyword_monikers() {
        assert_eq!(
            Moniker::parse_line("# AzureSdkOwners: @owner"),
            Ok(Some(Moniker::AzureSdkOwners))
        );
        assert_eq!(
            Moniker::parse_line("# PRLabel: %Storage"),
            Ok(Some(Moniker::PRLabel))
        );
        assert_eq!(
            Moniker::parse_line("# ServiceLabel: %Storage"),
            Ok(Some(Moniker::ServiceLabel))
        );
        assert_eq!(
            Moniker::parse_line("# ServiceOwners: @owner"),
            Ok(Some(Moniker::ServiceOwners))
        );
    }

    #[test]
    fn parse_moniker_without_payload() {
        assert_eq!(
            Moniker::parse_line("# ServiceOwners:"),
            Ok(Some(Moniker::ServiceOwners))
        );
    }

    #[test]
    fn parse_missing_folder_with_and_without_colon() {
        assert_eq!(
            Moniker::parse_line("#/<NotInRepo>/ @owner"),
            Ok(Some(Moniker::MissingFolder))
        );
        assert_eq!(
            Moniker::parse_line("# /<NotInRepo>/: @owner"),
            Ok(Some(Moniker::MissingFolder))
        );
    }

    #[test]
    fn keyword_without_colon_is_a_comment() {
        // A comment that merely mentions a moniker keyword isn't a moniker line.
        assert_eq!(
            Moniker::parse_line("# PRLabel isn't a moniker line, just a comment"),
            Ok(None)
        );
    }

    #[test]
    fn plain_comment_and_non_comment_lines() {
        assert_eq!(Moniker::parse_line("# just a comment"), Ok(None));
        assert_eq!(Moniker::parse_line("/sdk/storage/ @owner"), Ok(None));
        assert_eq!(Moniker::parse_line(""), Ok(None));
    }

    #[test]
    fn corrupted_bracket_moniker_is_fatal() {
        let err = Moniker::parse_line("#/<NotInRepoo>/ @owner").unwrap_err();
        assert_eq!(err.keyword, "/<NotInRepoo>/");
    }

    #[test]
    fn comment_with_slash_is_not_a_moniker() {
        // Comments referencing repo paths must not trip the bracket check.
        assert_eq!(Moniker::parse_line("# /sdk/storage is owned by X"), Ok(None));
    }

    #[test]
    fn display_matches_file_rendering() {
        assert_eq!(Moniker::AzureSdkOwners.to_string(), "AzureSdkOwners");
        assert_eq!(Moniker::MissingFolder.to_string(), "/<NotInRepo>/");
    }

    #[test]
    fn owner_and_label_classification() {
        assert!(Moniker::AzureSdkOwners.carries_owners());
        assert!(Moniker::MissingFolder.carries_owners());
        assert!(Moniker::ServiceOwners.carries_owners());
        assert!(Moniker::PRLabel.carries_labels());
        assert!(Moniker::ServiceLabel.carries_labels());
        assert!(!Moniker::PRLabel.carries_owners());
    }
}
