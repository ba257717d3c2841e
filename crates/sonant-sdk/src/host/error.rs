//! Error types for the host import interface.

#[derive(Debug, thiserror::Error)]
pub enum HostInterfaceError {
    /// The import table can only be attached once per process; later
    /// registrations keep the original table.
    #[error("host import table is already attached")]
    AlreadyAttached,
}
