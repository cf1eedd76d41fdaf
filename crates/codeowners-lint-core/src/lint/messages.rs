//! Error message text.
//!
//! Constants ending in `_PARTIAL` are suffixes prefixed with the offending
//! token when the message is built; the rest are complete messages. Keeping
//! them in one place gives tests and baseline files stable strings to
//! compare against.

// Block formatting messages
pub const DUPLICATE_MONIKER_IN_BLOCK_PARTIAL: &str =
    " moniker appears more than once in the block";
pub const AZURE_SDK_OWNERS_MUST_BE_WITH_SERVICE_LABEL: &str =
    "AzureSdkOwners moniker must be in a block with a ServiceLabel moniker";
pub const SERVICE_OWNERS_MUST_BE_WITH_SERVICE_LABEL: &str =
    "ServiceOwners moniker must be in a block with a ServiceLabel moniker";
pub const NEEDS_TO_END_WITH_SOURCE_OWNER_PARTIAL: &str =
    " moniker must be in a block that ends with a source path/owner line";
pub const SERVICE_LABEL_NEEDS_OWNERS: &str =
    "ServiceLabel moniker must be in a block that contains a ServiceOwners or /<NotInRepo>/ moniker, or ends with a source path/owner line";
pub const SERVICE_LABEL_HAS_TOO_MANY_OWNERS: &str =
    "ServiceLabel moniker is in a block that ends with a source path/owner line and also contains an owner moniker; owners can only come from one of them";
pub const SERVICE_LABEL_HAS_TOO_MANY_OWNER_MONIKERS: &str =
    "ServiceLabel moniker is in a block with both ServiceOwners and /<NotInRepo>/ monikers; only one is allowed";

// Owner messages
pub const MALFORMED_TEAM_ENTRY_PARTIAL: &str =
    " is a malformed team entry, team entries must be of the form @Azure/<team>";
pub const INVALID_TEAM_PARTIAL: &str = " is not a valid team with write permissions";
pub const INVALID_USER_PARTIAL: &str = " is not a valid user with write permissions";
pub const NOT_A_PUBLIC_MEMBER_OF_AZURE_PARTIAL: &str =
    " is not a public member of the Azure organization";
pub const MISSING_OWNERS: &str = "no owners are defined on a line that requires owners";

// Label messages
pub const MISSING_LABEL_PARTIAL: &str = " moniker requires a label but none was found";
pub const INVALID_REPOSITORY_LABEL_PARTIAL: &str = " is not a valid label for the repository";
pub const SERVICE_ATTENTION_IS_NOT_A_VALID_PR_LABEL: &str =
    "Service Attention is not a valid PRLabel";
pub const SERVICE_LABEL_MUST_CONTAIN_A_SERVICE_LABEL: &str =
    "ServiceLabel moniker requires a service label, Service Attention by itself is not one";

// Path expression messages
pub const CONTAINS_ESCAPED_POUND_PARTIAL: &str =
    " contains an escaped pound (\\#) which is not supported";
pub const CONTAINS_NEGATION_PARTIAL: &str = " contains a negation (!) which is not supported";
pub const CONTAINS_RANGE_PARTIAL: &str =
    " contains a character range ([ or ]) which is not supported";
pub const CONTAINS_QUESTION_MARK_PARTIAL: &str =
    " contains a question mark (?) which is not supported";
pub const PATH_IS_SINGLE_SLASH: &str = "a path expression cannot be a single /";
pub const PATH_IS_SINGLE_SLASH_TWO_ASTERISKS_SINGLE_SLASH: &str =
    "a path expression cannot be /**/";
pub const MUST_START_WITH_A_SLASH_PARTIAL: &str = " must start with a /";
pub const GLOB_CANNOT_END_WITH_TWO_ASTERISKS_PARTIAL: &str =
    " cannot end with /**, use a trailing / instead";
pub const GLOB_CANNOT_END_WITH_TWO_ASTERISKS_SLASH_PARTIAL: &str =
    " cannot end with /**/, use a trailing / instead";
pub const GLOB_CANNOT_END_IN_WILDCARD_PARTIAL: &str =
    " cannot end with a wildcard unless the suffix is /*";
pub const GLOB_HAS_NO_MATCHES_IN_REPO_PARTIAL: &str =
    " does not match any file or directory in the repository";
pub const PATH_OR_FILE_NOT_EXIST_IN_REPO_PARTIAL: &str = " does not exist in the repository";
