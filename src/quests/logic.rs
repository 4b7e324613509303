//! Quest creation and completion.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Builder;

use super::types::{Location, Quest, QuestStatus};
use crate::combat::types::Monster;
use crate::error::Rejection;
use crate::game::constants::{QUEST_LATITUDE_BOUND, QUEST_LONGITUDE_BOUND};

/// Picks a uniformly random map location for a quest marker.
pub fn random_location<R: Rng + ?Sized>(rng: &mut R) -> Location {
    Location {
        latitude: rng.gen_range(-QUEST_LATITUDE_BOUND..=QUEST_LATITUDE_BOUND),
        longitude: rng.gen_range(-QUEST_LONGITUDE_BOUND..=QUEST_LONGITUDE_BOUND),
    }
}

/// Creates a pending quest with a uniformly random monster and location.
///
/// The id is drawn from `rng` as well, so a seeded source reproduces the
/// whole quest.
pub fn create_quest<R: Rng + ?Sized>(
    title: &str,
    description: &str,
    monsters: &[Monster],
    created_at: i64,
    rng: &mut R,
) -> Result<Quest, Rejection> {
    let monster = monsters.choose(rng).ok_or(Rejection::NoMonsters)?;
    let location = random_location(rng);
    let id = Builder::from_random_bytes(rng.gen()).into_uuid();

    Ok(Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status: QuestStatus::Pending,
        monster_id: monster.id.clone(),
        location: Some(location),
        created_at: Some(created_at),
        completed_at: None,
    })
}

/// Returns the quest with `id` if it can still be completed.
pub fn find_pending_quest<'a>(quests: &'a [Quest], id: &str) -> Result<&'a Quest, Rejection> {
    let quest = quests
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| Rejection::NotFound(id.to_string()))?;

    if quest.is_completed() {
        return Err(Rejection::AlreadyCompleted(id.to_string()));
    }
    Ok(quest)
}

/// Marks quest `id` completed and returns the updated record.
///
/// Completion is one-way; a second call is rejected and changes nothing.
pub fn complete_quest(
    quests: &mut [Quest],
    id: &str,
    completed_at: i64,
) -> Result<Quest, Rejection> {
    find_pending_quest(quests, id)?;

    let quest = quests
        .iter_mut()
        .find(|q| q.id == id)
        .ok_or_else(|| Rejection::NotFound(id.to_string()))?;
    quest.status = QuestStatus::Completed;
    quest.completed_at = Some(completed_at);
    Ok(quest.clone())
}

/// Quests still shown on the map.
pub fn pending_quests(quests: &[Quest]) -> impl Iterator<Item = &Quest> {
    quests.iter().filter(|q| q.is_pending())
}
