pub type PlayerId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub active: bool,
}

/// Fixed-size player roster. Players are never removed, only deactivated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(count: usize) -> Self {
        Self {
            players: (0..count).map(|id| Player { id, active: true }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_active(&self, id: PlayerId) -> bool {
        self.players.get(id).map(|player| player.active).unwrap_or(false)
    }

    /// Active ids in stable id order.
    pub fn active_ids(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|player| player.active)
            .map(|player| player.id)
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|player| player.active).count()
    }

    /// Returns false for unknown ids and for players already out.
    pub fn eliminate(&mut self, id: PlayerId) -> bool {
        match self.players.get_mut(id) {
            Some(player) if player.active => {
                player.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn sole_active(&self) -> Option<PlayerId> {
        let mut active = self.players.iter().filter(|player| player.active);
        let first = active.next()?;
        if active.next().is_some() {
            return None;
        }
        Some(first.id)
    }
}
