use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::graph::NodeId;

pub const ROSTER: [&str; 40] = [
    "Sasuke", "Sakura", "Kakashi", "Hinata", "Shikamaru", "Ino", "Choji", "Rock Lee", "Neji",
    "Tenten", "Gaara", "Temari", "Kankuro", "Jiraiya", "Tsunade", "Orochimaru", "Itachi",
    "Kisame", "Deidara", "Sasori", "Hidan", "Kakuzu", "Konan", "Pain", "Minato", "Kushina",
    "Yamato", "Sai", "Shino", "Kiba", "Asuma", "Kurenai", "Iruka", "Anko", "Guy", "Obito",
    "Madara", "Hashirama", "Tobirama", "Hiruzen",
];

/// Display names for ninjas `1..=N`, drawn from a shuffled roster per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Names {
    assigned: Vec<&'static str>,
}

impl Names {
    pub fn shuffled<R: Rng + ?Sized>(nodes: usize, rng: &mut R) -> Self {
        let mut roster = ROSTER.to_vec();
        roster.shuffle(rng);
        if nodes > roster.len() {
            warn!(
                ninjas = nodes,
                roster = roster.len(),
                "not enough names, falling back to numbered ninjas"
            );
        }
        roster.truncate(nodes);
        Self { assigned: roster }
    }

    /// Roster order, unshuffled.
    pub fn in_order(nodes: usize) -> Self {
        Self {
            assigned: ROSTER.iter().copied().take(nodes).collect(),
        }
    }

    /// Ids without a roster name (including invalid ids) become `Ninja {id}`.
    pub fn name(&self, id: i64) -> String {
        usize::try_from(id)
            .ok()
            .and_then(|id: NodeId| id.checked_sub(1))
            .and_then(|idx| self.assigned.get(idx))
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("Ninja {}", id))
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
