//! Events published by the engine and the subscriber registry.
//!
//! The presentation layer subscribes to these instead of reading shared
//! state. Subscribers are notified in registration order.

use crate::character::player::Player;
use crate::combat::types::BattleResult;
use crate::error::Rejection;
use crate::quests::types::Quest;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A saved or fresh state was installed in the engine.
    StateLoaded,

    QuestAdded { quest: Quest },

    /// A quest was completed and its battle applied to the player.
    BattleResolved {
        quest_id: String,
        monster_name: String,
        result: BattleResult,
        xp_gain: u64,
        gold_gain: u32,
        hp_loss: u32,
        player: Player,
    },

    LeveledUp { level: u32, max_hp: u32 },

    PurchaseCompleted { item_id: String, player: Player },

    PurchaseRejected { item_id: String, reason: Rejection },
}

impl GameEvent {
    /// One-line log message for this event.
    pub fn message(&self) -> String {
        match self {
            GameEvent::StateLoaded => "State loaded".to_string(),
            GameEvent::QuestAdded { quest } => {
                format!("New quest {}: {} ({})", quest.id, quest.title, quest.monster_id)
            }
            GameEvent::BattleResolved {
                quest_id,
                monster_name,
                result,
                xp_gain,
                gold_gain,
                hp_loss,
                ..
            } => format!(
                "Quest {} vs {} {}: +{} XP, +{}g, -{} HP",
                quest_id,
                monster_name,
                result.name().to_uppercase(),
                xp_gain,
                gold_gain,
                hp_loss
            ),
            GameEvent::LeveledUp { level, max_hp } => {
                format!("Level up! Now level {} with {} max HP", level, max_hp)
            }
            GameEvent::PurchaseCompleted { item_id, player } => format!(
                "Bought {}: {} gold left, HP {}/{}",
                item_id, player.gold, player.hp, player.max_hp
            ),
            GameEvent::PurchaseRejected { item_id, reason } => {
                format!("Could not buy {}: {}", item_id, reason)
            }
        }
    }
}

/// Receives engine events.
pub trait EventSubscriber {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventSubscriber for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Box<dyn EventSubscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<S: EventSubscriber + 'static>(&mut self, subscriber: S) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn publish(&mut self, event: &GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber.on_event(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribers_notified_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            bus.subscribe(move |_: &GameEvent| order.borrow_mut().push(tag));
        }

        bus.publish(&GameEvent::StateLoaded);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
        assert_eq!(bus.len(), 3);
    }

    #[test]
    fn test_struct_subscriber() {
        struct Counter(Rc<RefCell<u32>>);
        impl EventSubscriber for Counter {
            fn on_event(&mut self, _event: &GameEvent) {
                *self.0.borrow_mut() += 1;
            }
        }

        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();
        bus.subscribe(Counter(Rc::clone(&count)));
        bus.publish(&GameEvent::StateLoaded);
        bus.publish(&GameEvent::LeveledUp {
            level: 2,
            max_hp: 120,
        });

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());
        bus.publish(&GameEvent::StateLoaded);
    }

    #[test]
    fn test_rejection_message() {
        let event = GameEvent::PurchaseRejected {
            item_id: "p1".to_string(),
            reason: Rejection::InsufficientFunds { price: 10, gold: 5 },
        };
        assert_eq!(
            event.message(),
            "Could not buy p1: insufficient funds: price 10, gold 5"
        );
    }
}
