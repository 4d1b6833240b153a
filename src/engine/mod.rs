// ============================================================================
// Engine Module
// Applies money operations to a running balance and reports them
// ============================================================================

mod session;

pub use session::MoneySession;
