//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index for real players plus two sentinels that game states report
//! when no real player is to move: [`PlayerId::CHANCE`] at chance nodes and
//! [`PlayerId::TERMINAL`] once the game is over. Neither sentinel is ever a
//! valid agent index.
//!
//! ## PlayerMap
//!
//! One value per real player, indexed by `PlayerId`. Used for returns
//! vectors and per-seat game data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier. Real players are `0..player_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Reported by `current_player()` at chance nodes.
    pub const CHANCE: PlayerId = PlayerId(u8::MAX);

    /// Reported by `current_player()` at terminal nodes.
    pub const TERMINAL: PlayerId = PlayerId(u8::MAX - 1);

    /// Largest number of real players a session supports.
    pub const MAX_PLAYERS: usize = (u8::MAX - 1) as usize;

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based). Meaningless for sentinels.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for the chance and terminal sentinels.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.0 >= u8::MAX - 1
    }

    /// Iterate over all real player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use turnloop::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlayerId::CHANCE => write!(f, "chance"),
            PlayerId::TERMINAL => write!(f, "terminal"),
            PlayerId(i) => write!(f, "Player {}", i),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use turnloop::core::{PlayerId, PlayerMap};
///
/// let mut returns: PlayerMap<f64> = PlayerMap::with_value(2, 0.0);
/// returns[PlayerId::new(0)] = 1.0;
/// returns[PlayerId::new(1)] = -1.0;
/// assert_eq!(returns.to_string(), "1 -1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= PlayerId::MAX_PLAYERS,
            "At most {} players supported",
            PlayerId::MAX_PLAYERS
        );

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Values in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<Vec<T>> for PlayerMap<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Space-joined values in seat order.
impl<T: std::fmt::Display> std::fmt::Display for PlayerMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
