use crate::ports::outbound::ResolutionFormatter;
use crate::shared::Result;
use crate::version_resolution::domain::ResultEntry;
use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

static PLACEHOLDER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)\[PLACEHOLDER\].*$").expect("static regex"));

/// FacterTemplateFormatter adapter expanding a Facter fact template
///
/// Every template line holding the `[PLACEHOLDER]` marker is replaced by an
/// `elsif` chain mapping BIOS fingerprints to versions, indented like the
/// marker. A branch tests the BIOS date as well only when its address is
/// seen with more than one date and version.
pub struct FacterTemplateFormatter {
    template_name: String,
    template: String,
}

impl FacterTemplateFormatter {
    /// # Arguments
    /// * `template_name` - Path echoed in the generated header comment
    /// * `template` - Template text
    pub fn new(template_name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            template: template.into(),
        }
    }

    fn branches(entries: &[ResultEntry]) -> Vec<String> {
        let mut pairs_by_address: HashMap<&str, BTreeSet<(&str, &str)>> = HashMap::new();
        for entry in entries {
            pairs_by_address
                .entry(entry.address.as_str())
                .or_default()
                .insert((entry.date.as_str(), entry.resolved_version.as_str()));
        }

        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for entry in entries {
            let needs_date = pairs_by_address
                .get(entry.address.as_str())
                .is_some_and(|pairs| pairs.len() > 1);
            let condition = if needs_date {
                format!(
                    "elsif biosaddress == '{}' and biosdate == '{}'",
                    entry.address, entry.date
                )
            } else {
                format!("elsif biosaddress == '{}'", entry.address)
            };
            let body = format!("    vmversion = '{}'", entry.resolved_version);

            if seen.insert((condition.clone(), body.clone())) {
                lines.push(condition);
                lines.push(body);
            }
        }
        lines
    }
}

impl ResolutionFormatter for FacterTemplateFormatter {
    fn format(&self, entries: &[ResultEntry]) -> Result<String> {
        let branches = Self::branches(entries);
        let mut output = format!("# This file was generated from {}\n\n", self.template_name);
        let mut placeholders = 0;

        for line in self.template.lines() {
            match PLACEHOLDER_LINE.captures(line) {
                Some(caps) => {
                    placeholders += 1;
                    let indent = &caps[1];
                    for branch in &branches {
                        output.push_str(indent);
                        output.push_str(branch);
                        output.push('\n');
                    }
                }
                None => {
                    output.push_str(line);
                    output.push('\n');
                }
            }
        }

        if placeholders == 0 {
            tracing::warn!(template = %self.template_name, "template has no [PLACEHOLDER] line");
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "if biosaddress == 'no_data'\n    vmversion = 'unknown'\n    [PLACEHOLDER]\nelse\n    vmversion = 'unknown'\nend\n";

    #[test]
    fn test_header_and_placeholder_expansion() {
        let entries = vec![ResultEntry::new("0xE99E0", "04/14/2014", "1331820", "5.5")];
        let formatter = FacterTemplateFormatter::new("templates/vmware_version.rb", TEMPLATE);
        let output = formatter.format(&entries).unwrap();

        let expected = "# This file was generated from templates/vmware_version.rb\n\
\n\
if biosaddress == 'no_data'\n\
\x20   vmversion = 'unknown'\n\
\x20   elsif biosaddress == '0xE99E0'\n\
\x20       vmversion = '5.5'\n\
else\n\
\x20   vmversion = 'unknown'\n\
end\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_date_branch_when_address_is_shared() {
        let entries = vec![
            ResultEntry::new("0xEA0C0", "09/21/2015", "1", "6.0"),
            ResultEntry::new("0xEA0C0", "09/30/2016", "2", "6.5"),
            ResultEntry::new("0xE99E0", "04/14/2014", "3", "5.5"),
        ];
        let branches = FacterTemplateFormatter::branches(&entries);
        assert_eq!(
            branches,
            vec![
                "elsif biosaddress == '0xEA0C0' and biosdate == '09/21/2015'",
                "    vmversion = '6.0'",
                "elsif biosaddress == '0xEA0C0' and biosdate == '09/30/2016'",
                "    vmversion = '6.5'",
                "elsif biosaddress == '0xE99E0'",
                "    vmversion = '5.5'",
            ]
        );
    }

    #[test]
    fn test_identical_branches_are_emitted_once() {
        let entries = vec![
            ResultEntry::new("0xE99E0", "04/14/2014", "1", "5.5"),
            ResultEntry::new("0xEA0C0", "09/21/2015", "2", "6.0"),
            ResultEntry::new("0xE99E0", "04/14/2014", "3", "5.5"),
        ];
        let branches = FacterTemplateFormatter::branches(&entries);
        assert_eq!(branches.len(), 4);
    }

    #[test]
    fn test_template_without_placeholder_is_copied() {
        let formatter = FacterTemplateFormatter::new("t.rb", "line one\nline two");
        let output = formatter
            .format(&[ResultEntry::new("0xE99E0", "04/14/2014", "1", "5.5")])
            .unwrap();
        assert_eq!(output, "# This file was generated from t.rb\n\nline one\nline two\n");
    }
}
