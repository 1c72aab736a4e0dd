/// Side effects triggered when a game ends, such as playing a sound.
///
/// The collaborator is stateless from the engine's point of view: it is only
/// borrowed immutably, and [`Game`](crate::Game) calls it at most once per game.
pub trait GameEffects {
    /// The game was won.
    fn won(&self) {}

    /// The game was lost.
    fn lost(&self) {}
}

/// Effects that do nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoEffects;

impl GameEffects for NoEffects {}

impl<E> GameEffects for &E
where
    E: GameEffects + ?Sized,
{
    fn won(&self) {
        (**self).won();
    }

    fn lost(&self) {
        (**self).lost();
    }
}
