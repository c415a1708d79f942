/// One discrete command per displayed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Quit,
    #[default]
    Noop,
}
