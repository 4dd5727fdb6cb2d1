//! Domain-edge behavior for Cartesian backends.

/// How a mesh resolves stencil neighbours that fall outside the domain.
///
/// The host grid normally supplies boundary conditions through ghost
/// cells; `Clamp` reproduces the zero-gradient ghost default and is what
/// the property pipeline assumes unless configured otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary cell itself
    /// (zero-gradient ghost equivalent).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted; stencil operations renormalize
    /// over the neighbours actually present.
    Absorb,
}
