//! Macros for declarative configuration.

/// Build a [`Config`](crate::config::Config) from a compact state listing.
///
/// # Example
///
/// ```
/// use rewind_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "pause" => "paused" },
///         "paused" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut states = $crate::config::StateTable::new();
        $(
            states.insert(
                $state,
                $crate::config::StateDefinition::new()
                    $( .on($event, $target) )*,
            );
        )*
        $crate::config::Config::new($initial, states)
    }};
}
