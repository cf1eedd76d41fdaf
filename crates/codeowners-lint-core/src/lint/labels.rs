//! Label verification for `PRLabel` and `ServiceLabel` monikers.

use super::messages;
use crate::parse::{Moniker, parse_labels};
use crate::providers::RepoLabelData;
use log::trace;

/// The label that routes an issue to the service team instead of the SDK
/// team. It rides along on ServiceLabel entries but is never a label in its
/// own right.
pub const SERVICE_ATTENTION_LABEL: &str = "Service Attention";

/// Verifies the labels on a `PRLabel` or `ServiceLabel` moniker line.
pub(crate) fn verify_labels(
    label_data: &dyn RepoLabelData,
    line: &str,
    moniker: Moniker,
    error_strings: &mut Vec<String>,
) {
    let labels = parse_labels(line);
    if labels.is_empty() {
        error_strings.push(format!("{moniker}{}", messages::MISSING_LABEL_PARTIAL));
        return;
    }

    for label in &labels {
        trace!("Verifying label {:?}", label);
        if !label_data.label_exists(label) {
            error_strings.push(format!(
                "'{label}'{}",
                messages::INVALID_REPOSITORY_LABEL_PARTIAL
            ));
        }
    }

    match moniker {
        Moniker::PRLabel => {
            if labels.iter().any(|label| label == SERVICE_ATTENTION_LABEL) {
                error_strings.push(messages::SERVICE_ATTENTION_IS_NOT_A_VALID_PR_LABEL.to_string());
            }
        }
        Moniker::ServiceLabel => {
            if labels.iter().all(|label| label == SERVICE_ATTENTION_LABEL) {
                error_strings
                    .push(messages::SERVICE_LABEL_MUST_CONTAIN_A_SERVICE_LABEL.to_string());
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::RepoLabelSnapshot;

    fn label_data() -> RepoLabelSnapshot {
        RepoLabelSnapshot::new()
            .with_label("FakeLabel0")
            .with_label("FakeLabel1")
            .with_label("FakeLabel2")
            .with_label(SERVICE_ATTENTION_LABEL)
    }

    fn verify(line: &str, moniker: Moniker) -> Vec<String> {
        let mut errors = Vec::new();
        verify_labels(&label_data(), line, moniker, &mut errors);
        errors
    }

    #[test]
    fn valid_labels_old_and_new_syntax() {
        assert!(verify("# PRLabel: %FakeLabel0", Moniker::PRLabel).is_empty());
        assert!(verify("# PRLabel: FakeLabel2", Moniker::PRLabel).is_empty());
        assert!(
            verify(
                "# ServiceLabel: %FakeLabel1 %Service Attention",
                Moniker::ServiceLabel
            )
            .is_empty()
        );
    }

    #[test]
    fn missing_label_is_reported() {
        assert_eq!(
            verify("# ServiceLabel:", Moniker::ServiceLabel),
            vec![format!("ServiceLabel{}", messages::MISSING_LABEL_PARTIAL)]
        );
    }

    #[test]
    fn unknown_label_is_reported_quoted() {
        assert_eq!(
            verify("# PRLabel: %FakeLabel987 %FakeLabel1", Moniker::PRLabel),
            vec![format!(
                "'FakeLabel987'{}",
                messages::INVALID_REPOSITORY_LABEL_PARTIAL
            )]
        );
    }

    #[test]
    fn service_attention_is_not_a_pr_label() {
        assert_eq!(
            verify("# PRLabel: Service Attention", Moniker::PRLabel),
            vec![messages::SERVICE_ATTENTION_IS_NOT_A_VALID_PR_LABEL.to_string()]
        );
    }

    #[test]
    fn service_label_cannot_be_only_service_attention() {
        assert_eq!(
            verify("# ServiceLabel: %Service Attention", Moniker::ServiceLabel),
            vec![messages::SERVICE_LABEL_MUST_CONTAIN_A_SERVICE_LABEL.to_string()]
        );
    }
}
