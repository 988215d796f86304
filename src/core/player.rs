//! Player labels and per-player data storage.
//!
//! ## PlayerId
//!
//! Players are plain integer labels numbered from 1, which is how they
//! appear on the board. Label 0 never denotes a player.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by label.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player label supporting 1-255 players.
///
/// Labels are 1-based: the first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a player label.
    #[must_use]
    pub const fn new(label: u8) -> Self {
        Self(label)
    }

    /// Raw 1-based label.
    #[must_use]
    pub const fn label(self) -> u8 {
        self.0
    }

    /// 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Whether this label belongs to a game with `player_count` players.
    #[must_use]
    pub const fn is_valid(self, player_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= player_count
    }

    /// The player after this one, wrapping from `player_count` back to 1.
    ///
    /// ```
    /// use reversi_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        PlayerId((self.0 as usize % player_count) as u8 + 1)
    }

    /// Iterate over all labels for a game with `player_count` players.
    ///
    /// ```
    /// use reversi_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use reversi_engine::core::{PlayerId, PlayerMap};
///
/// let mut pieces: PlayerMap<usize> = PlayerMap::with_value(3, 0);
/// pieces[PlayerId::new(2)] += 5;
/// assert_eq!(pieces[PlayerId::new(2)], 5);
/// assert_eq!(pieces[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
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
