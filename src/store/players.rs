use crate::domain::Player;

/// Players in registration order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends even when the username is already on the roster
    pub fn insert(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn list_all(&self) -> &[Player] {
        &self.players
    }

    pub fn contains(&self, username: &str) -> bool {
        self.players.iter().any(|p| p.username == username)
    }
}
