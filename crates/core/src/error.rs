use crate::mark::Mark;

/// An alias resolution error.
///
/// `UnknownAnchor` is the user-facing error a builder attaches to every
/// placeholder when the alias is first seen; the resolver hands it back
/// verbatim. The remaining variants report problems with the anchor table
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An alias names an anchor that is not in the anchor table.
    #[error("{}unknown anchor `{name}`", at(.mark))]
    UnknownAnchor { name: String, mark: Option<Mark> },

    /// An anchor is bound directly to an unresolved placeholder. The table
    /// builder must never do this.
    #[error("internal error: anchor `{anchor}` is bound to unresolved alias `{alias}`")]
    AnchorBoundToAlias { anchor: String, alias: String },

    /// Anchors reference each other in a loop, e.g. `&a [*b]` with `&b [*a]`.
    #[error("{}alias cycle: {}", at(.mark), .cycle.join(" \u{2192} "))]
    AliasCycle {
        cycle: Vec<String>,
        mark: Option<Mark>,
    },

    /// Placeholders remained after the configured number of passes.
    #[error("aliases still unresolved after {passes} passes ({remaining} remaining)")]
    Unconverged { passes: usize, remaining: usize },
}

fn at(mark: &Option<Mark>) -> String {
    mark.map(|m| format!("{}: ", m)).unwrap_or_default()
}

impl Error {
    /// The error a builder pre-builds for an alias reference to `name`.
    pub fn unknown_anchor(name: impl Into<String>, mark: Option<Mark>) -> Self {
        Error::UnknownAnchor {
            name: name.into(),
            mark,
        }
    }

    /// True for errors that indicate a bug in how the anchor table was
    /// populated rather than a problem in the document.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::AnchorBoundToAlias { .. })
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Error::UnknownAnchor { mark, .. } | Error::AliasCycle { mark, .. } => *mark,
            Error::AnchorBoundToAlias { .. } | Error::Unconverged { .. } => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Error::UnknownAnchor { .. } => "unknown_anchor",
            Error::AnchorBoundToAlias { .. } => "anchor_bound_to_alias",
            Error::AliasCycle { .. } => "alias_cycle",
            Error::Unconverged { .. } => "unconverged",
        }
    }

    /// Serialize to a diagnostic JSON object. Every key is always present;
    /// `line` and `column` are null when the position is unknown.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mark = self.mark();
        serde_json::json!({
            "column":   mark.map(|m| m.column),
            "internal": self.is_internal(),
            "kind":     self.kind(),
            "line":     mark.map(|m| m.line),
            "message":  self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_anchor_message_carries_position() {
        let err = Error::unknown_anchor("base", Some(Mark::new(4, 9)));
        assert_eq!(err.to_string(), "4:9: unknown anchor `base`");
        assert!(!err.is_internal());
    }

    #[test]
    fn unknown_anchor_without_position() {
        let err = Error::unknown_anchor("base", None);
        assert_eq!(err.to_string(), "unknown anchor `base`");
        assert_eq!(err.mark(), None);
    }

    #[test]
    fn cycle_message_lists_path() {
        let err = Error::AliasCycle {
            cycle: vec!["a".into(), "b".into(), "a".into()],
            mark: None,
        };
        assert_eq!(err.to_string(), "alias cycle: a \u{2192} b \u{2192} a");
    }

    #[test]
    fn anchor_bound_to_alias_is_internal() {
        let err = Error::AnchorBoundToAlias {
            anchor: "a".into(),
            alias: "b".into(),
        };
        assert!(err.is_internal());
        assert_eq!(err.to_json_value()["internal"], serde_json::json!(true));
    }

    #[test]
    fn json_value_has_all_keys() {
        let v = Error::unknown_anchor("x", Some(Mark::new(2, 1))).to_json_value();
        assert_eq!(v["kind"], "unknown_anchor");
        assert_eq!(v["line"], 2);
        assert_eq!(v["column"], 1);
        assert_eq!(v["message"], "2:1: unknown anchor `x`");

        let v = Error::Unconverged {
            passes: 3,
            remaining: 1,
        }
        .to_json_value();
        assert!(v["line"].is_null());
        assert!(v["column"].is_null());
    }
}
