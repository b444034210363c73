// Game action definitions

/// Actions a platforming character responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,
}

impl Action {
    /// Every action, in a stable order
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Jump,
    ];
}
