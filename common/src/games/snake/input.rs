use super::types::{Direction, Lifecycle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    PauseToggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Ignore,
    Turn(Direction),
    Pause,
    Resume,
    StartWithDirection(Direction),
}

/// Translates a raw input into a command for the controller.
///
/// While paused only the toggle gets through. A turn that reverses the
/// committed direction is dropped. The very first turn of an idle board starts
/// the game.
pub fn map_input(lifecycle: Lifecycle, committed: Option<Direction>, input: Input) -> InputCommand {
    match (lifecycle, input) {
        (Lifecycle::Paused, Input::PauseToggle) => InputCommand::Resume,
        (Lifecycle::Paused, Input::Turn(_)) => InputCommand::Ignore,
        (Lifecycle::Running, Input::PauseToggle) => InputCommand::Pause,
        (Lifecycle::Running, Input::Turn(direction)) => match committed {
            Some(current) if direction.is_opposite(&current) => InputCommand::Ignore,
            _ => InputCommand::Turn(direction),
        },
        (Lifecycle::NotStarted, Input::Turn(direction)) => InputCommand::StartWithDirection(direction),
        (Lifecycle::NotStarted, Input::PauseToggle) | (Lifecycle::Ended, _) => InputCommand::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_of_committed_is_ignored() {
        let command = map_input(Lifecycle::Running, Some(Direction::Right), Input::Turn(Direction::Left));
        assert_eq!(command, InputCommand::Ignore);
    }

    #[test]
    fn test_perpendicular_turn_is_accepted() {
        for direction in [Direction::Up, Direction::Down] {
            let command = map_input(Lifecycle::Running, Some(Direction::Right), Input::Turn(direction));
            assert_eq!(command, InputCommand::Turn(direction));
        }
    }

    #[test]
    fn test_any_turn_accepted_without_committed_direction() {
        let command = map_input(Lifecycle::Running, None, Input::Turn(Direction::Left));
        assert_eq!(command, InputCommand::Turn(Direction::Left));
    }

    #[test]
    fn test_paused_only_accepts_toggle() {
        assert_eq!(
            map_input(Lifecycle::Paused, Some(Direction::Up), Input::Turn(Direction::Left)),
            InputCommand::Ignore
        );
        assert_eq!(
            map_input(Lifecycle::Paused, Some(Direction::Up), Input::PauseToggle),
            InputCommand::Resume
        );
    }

    #[test]
    fn test_toggle_pauses_running_game() {
        assert_eq!(
            map_input(Lifecycle::Running, None, Input::PauseToggle),
            InputCommand::Pause
        );
    }

    #[test]
    fn test_first_turn_starts_idle_game() {
        assert_eq!(
            map_input(Lifecycle::NotStarted, None, Input::Turn(Direction::Down)),
            InputCommand::StartWithDirection(Direction::Down)
        );
        assert_eq!(
            map_input(Lifecycle::NotStarted, None, Input::PauseToggle),
            InputCommand::Ignore
        );
    }

    #[test]
    fn test_ended_game_ignores_everything() {
        assert_eq!(
            map_input(Lifecycle::Ended, Some(Direction::Up), Input::Turn(Direction::Left)),
            InputCommand::Ignore
        );
        assert_eq!(
            map_input(Lifecycle::Ended, Some(Direction::Up), Input::PauseToggle),
            InputCommand::Ignore
        );
    }
}
