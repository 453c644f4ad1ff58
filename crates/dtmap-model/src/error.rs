use thiserror::Error;

/// Problems with the values read from the selection form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Please select both source and target.")]
    MissingSystems,
    #[error("Please select a remapping option.")]
    MissingRemappingOption,
    #[error("Unknown remapping option '{0}'.")]
    UnknownRemappingOption(String),
}
