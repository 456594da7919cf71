/// Side effects the handler asks the main loop to perform. State changes are
/// applied directly by the handler; only terminal-level effects land here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Bell,
}
