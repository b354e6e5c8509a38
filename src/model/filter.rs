/// Search conditions for the signature query endpoint
///
/// Each field holds a comma-separated list of accepted values. Conditions
/// are combined with logical AND; fields that were never set (or were set to
/// an empty string) are left out of the rendered expression entirely.
///
/// # Example
/// ```ignore
/// let filter = SignatureFilter::new()
///     .manifest_digests("sha256:aaa,sha256:bbb")
///     .sig_key_ids("199e2f91fd431d51");
/// assert_eq!(
///     filter.render().unwrap(),
///     "manifest_digest=in=(sha256:aaa,sha256:bbb),sig_key_id=in=(199e2f91fd431d51)"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureFilter {
    manifest_digests: Option<String>,
    references: Option<String>,
    sig_key_ids: Option<String>,
}

impl SignatureFilter {
    /// Creates an empty filter matching all signatures
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to the given comma-separated manifest digests
    pub fn manifest_digests(mut self, digests: impl Into<String>) -> Self {
        self.manifest_digests = Some(digests.into());
        self
    }

    /// Restricts results to the given comma-separated pull references
    pub fn references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }

    /// Restricts results to the given comma-separated signing key ids
    pub fn sig_key_ids(mut self, key_ids: impl Into<String>) -> Self {
        self.sig_key_ids = Some(key_ids.into());
        self
    }

    /// Renders the filter expression, or `None` when no condition is set
    ///
    /// Clauses appear in fixed field order (manifest_digest, reference,
    /// sig_key_id) as `field=in=(values)` segments joined by commas.
    pub fn render(&self) -> Option<String> {
        let mut clauses = Vec::new();
        if let Some(digests) = non_empty(&self.manifest_digests) {
            clauses.push(format!("manifest_digest=in=({digests})"));
        }
        if let Some(references) = non_empty(&self.references) {
            clauses.push(format!("reference=in=({references})"));
        }
        if let Some(key_ids) = non_empty(&self.sig_key_ids) {
            clauses.push(format!("sig_key_id=in=({key_ids})"));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(","))
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
