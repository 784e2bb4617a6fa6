/// A single 'frame' of a nested table structure, holding values that can be
/// mapped over via `map_frame`.
///
/// Generally speaking, you won't use this trait yourself: it's the internal
/// plumbing that lets [`crate::deep_copy`] and [`crate::dump`] walk arbitrarily
/// deep tables without recursing on the call stack.
///
/// Rust does not allow implementing a trait for a partially applied type, so
/// the convention is to implement it for `MyFrame<PartiallyApplied>`:
///
/// ```rust
/// # use anytable::frame::{MappableFrame, PartiallyApplied};
/// #[derive(Debug, PartialEq, Eq)]
/// enum Pair<A> {
///     Both(A, A),
///     Neither,
/// }
///
/// impl MappableFrame for Pair<PartiallyApplied> {
///     type Frame<X> = Pair<X>;
///
///     fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
///         match input {
///             Pair::Both(a, b) => Pair::Both(f(a), f(b)),
///             Pair::Neither => Pair::Neither,
///         }
///     }
/// }
///
/// let mapped = Pair::<PartiallyApplied>::map_frame(Pair::Both(1, 2), |n| n * 10);
/// assert_eq!(mapped, Pair::Both(10, 20));
/// ```
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a frame, in a stable order
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Expands some seed value `Seed` into frames via a function `Seed -> Frame<Seed>`
/// and collapses those frames via a function `Frame<Out> -> Out`.
///
/// Performs a depth-first traversal, expanding and collapsing each branch in
/// turn. Every seed is expanded before any frame that contains it is collapsed,
/// and `collapse_frame` receives child outputs in the order `map_frame` visited
/// the seeds.
///
/// This function is stack safe (it does not use the call stack), but it
/// does use an internal stack data structure and is thus, technically,
/// susceptible to running out of memory if said stack grows without bound
pub fn expand_and_collapse<F: MappableFrame, Seed, Out>(
    seed: Seed,
    mut expand_frame: impl FnMut(Seed) -> F::Frame<Seed>,
    mut collapse_frame: impl FnMut(F::Frame<Out>) -> Out,
) -> Out {
    enum State<Seed, Expanded> {
        Expand(usize, Seed),
        Collapse(usize, Expanded),
    }

    let mut vals: Vec<Option<Out>> = vec![None];
    let mut stack = vec![State::Expand(0, seed)];

    while let Some(item) = stack.pop() {
        match item {
            State::Expand(val_idx, seed) => {
                let node = expand_frame(seed);
                let mut seeds = Vec::new();
                let node = F::map_frame(node, |seed| {
                    vals.push(None);
                    let idx = vals.len() - 1;
                    seeds.push(State::Expand(idx, seed));
                    idx
                });

                stack.push(State::Collapse(val_idx, node));
                // pushed in reverse so children expand in visiting order
                stack.extend(seeds.into_iter().rev());
            }
            State::Collapse(val_idx, node) => {
                let node = F::map_frame(node, |k| {
                    vals[k]
                        .take()
                        .expect("child collapsed before its parent frame")
                });
                vals[val_idx] = Some(collapse_frame(node));
            }
        };
    }
    vals[0].take().expect("root frame collapsed")
}
