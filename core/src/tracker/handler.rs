use super::instance::EncounterInstance;
use super::signal::TrackerSignal;

/// Trait for systems that react to tracker signals.
/// Implement this for overlays, loggers, audio cues, etc.
pub trait SignalHandler {
    /// Handle a single signal with optional encounter context.
    ///
    /// The encounter provides read access to stage, phase and the identified
    /// pattern so handlers don't need to maintain duplicate state.
    fn handle_signal(&mut self, signal: &TrackerSignal, encounter: Option<&EncounterInstance<'_>>);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(
        &mut self,
        signals: &[TrackerSignal],
        encounter: Option<&EncounterInstance<'_>>,
    ) {
        for signal in signals {
            self.handle_signal(signal, encounter);
        }
    }
}
