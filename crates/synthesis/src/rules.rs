//! The "detect a condition, then synthesize a fix" abstraction shared by page-scoped and
//! section-scoped recommendation generators.

/// A single recommendation rule evaluated against a context `C`.
pub trait Rule<C> {
    type Output;

    /// Whether the rule's condition holds for this context.
    fn applies(&self, ctx: &C) -> bool;

    /// Builds the recommendation. Only called when [`Rule::applies`] returned true.
    fn synthesize(&self, ctx: &C) -> Self::Output;
}

/// Evaluates rules in declaration order and collects the outputs of those that apply.
pub fn apply_rules<'r, C, R>(rules: impl IntoIterator<Item = &'r R>, ctx: &C) -> Vec<R::Output>
where
    R: Rule<C> + 'r,
{
    rules
        .into_iter()
        .filter(|rule| rule.applies(ctx))
        .map(|rule| rule.synthesize(ctx))
        .collect()
}
