//! The fixed set of mansion rooms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GRID_SIZE, Item, Position, map::Grid};

/// Stable index of a room in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

pub const MAIN_LABORATORY: RoomId = RoomId(0);
pub const LIBRARY: RoomId = RoomId(1);
pub const CONSERVATORY: RoomId = RoomId(2);
pub const WORKSHOP: RoomId = RoomId(3);
pub const STUDY: RoomId = RoomId(4);
pub const KITCHEN: RoomId = RoomId(5);
pub const BASEMENT_LABORATORY: RoomId = RoomId(6);
pub const ATTIC: RoomId = RoomId(7);
pub const GARDEN: RoomId = RoomId(8);
pub const FIRST_BEDROOM: RoomId = RoomId(9);

/// Rooms that hold a puzzle, in chain order. Index = chain position.
pub const CHAIN_ROOMS: [RoomId; 4] = [MAIN_LABORATORY, WORKSHOP, KITCHEN, GARDEN];

/// A room placed on the mansion grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub name: &'static str,
    pub description: &'static str,
    pub glyph: char,
    pub position: Position,
    /// Observable feature tokens, in display order. Never changes.
    pub features: &'static [&'static str],
}

impl Room {
    pub fn has_feature(&self, token: &str) -> bool {
        self.features.contains(&token)
    }

    /// The item behind a feature token, if this room offers it for collection.
    pub fn collectible(&self, token: &str) -> Option<Item> {
        if self.has_feature(token) {
            Item::from_str(token).ok()
        } else {
            None
        }
    }
}

const MANSION_ROOMS: [Room; 10] = [
    Room {
        id: MAIN_LABORATORY,
        name: "Main Laboratory",
        description: "A sophisticated lab filled with mysterious equipment and the damaged Chronosphere",
        glyph: 'M',
        position: Position::new(5, 5),
        features: &["chronosphere", "equipment", "research_manual", "broken_keycard"],
    },
    Room {
        id: LIBRARY,
        name: "Library",
        description: "Walls lined with ancient physics books and quantum theory manuscripts",
        glyph: 'L',
        position: Position::new(3, 3),
        features: &["research_manual", "desk", "quantum_equations", "old_diary"],
    },
    Room {
        id: CONSERVATORY,
        name: "Conservatory",
        description: "A glass-enclosed room with strange, time-affected plants",
        glyph: 'C',
        position: Position::new(2, 2),
        features: &["plants", "fountain", "strange_flower", "garden_tools"],
    },
    Room {
        id: WORKSHOP,
        name: "Workshop",
        description: "A cluttered room with tools and half-finished inventions",
        glyph: 'W',
        position: Position::new(8, 8),
        features: &["tools", "workbench", "power_core", "circuits"],
    },
    Room {
        id: STUDY,
        name: "Study",
        description: "A cozy room with a desk covered in research notes",
        glyph: 'S',
        position: Position::new(5, 7),
        features: &["papers", "chair", "blackboard", "time_calculations"],
    },
    Room {
        id: KITCHEN,
        name: "Kitchen",
        description: "An old Victorian kitchen with modern scientific equipment",
        glyph: 'K',
        position: Position::new(5, 3),
        features: &["stove", "ingredients", "recipe_book", "crystal_vial"],
    },
    Room {
        id: BASEMENT_LABORATORY,
        name: "Basement Laboratory",
        description: "A darker, more experimental lab space",
        glyph: 'B',
        position: Position::new(2, 8),
        features: &["experiments", "tubes", "failed_prototypes", "lab_journal"],
    },
    Room {
        id: ATTIC,
        name: "Attic",
        description: "A dusty space filled with failed experiments",
        glyph: 'A',
        position: Position::new(8, 2),
        features: &["boxes", "window", "old_photographs", "dusty_machine"],
    },
    Room {
        id: GARDEN,
        name: "Garden",
        description: "An overgrown garden with temporally-shifted flora",
        glyph: 'G',
        position: Position::new(7, 6),
        features: &["strange_flower", "pond", "sundial", "temporal_anomaly"],
    },
    Room {
        id: FIRST_BEDROOM,
        name: "First Bedroom",
        description: "Dr. TTN's personal quarters, frozen in time",
        glyph: 'F',
        position: Position::new(3, 4),
        features: &["bed", "mirror", "personal_diary", "family_photo"],
    },
];

/// Immutable catalog of every room in the mansion.
///
/// Lookups by position are a linear scan; the glyph layer is precomputed once
/// for the map renderer and for bounds checks.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    glyphs: Grid<Option<char>>,
}

impl RoomCatalog {
    /// The ten rooms of the mansion.
    pub fn mansion() -> Self {
        let rooms = MANSION_ROOMS.to_vec();
        let glyphs = Grid::from_generator(GRID_SIZE, GRID_SIZE, |position| {
            rooms
                .iter()
                .find(|room| room.position == position)
                .map(|room| room.glyph)
        });
        Self { rooms, glyphs }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Name of a room, or a placeholder for an unknown id.
    pub fn name(&self, id: RoomId) -> &'static str {
        self.get(id).map_or("unknown room", |room| room.name)
    }

    /// Returns the room occupying `position`, or `None` for empty space.
    pub fn room_at(&self, position: Position) -> Option<&Room> {
        self.rooms.iter().find(|room| room.position == position)
    }

    /// Chain position of the puzzle gating `room`, if it is gated.
    pub fn chain_position(&self, room: RoomId) -> Option<usize> {
        CHAIN_ROOMS.iter().position(|gated| *gated == room)
    }

    pub fn is_gated(&self, room: RoomId) -> bool {
        self.chain_position(room).is_some()
    }

    /// Rooms whose feature list offers `item`, non-gated rooms first.
    pub fn sources_of(&self, item: Item) -> Vec<&Room> {
        let mut sources: Vec<&Room> = self
            .rooms
            .iter()
            .filter(|room| room.has_feature(item.token()))
            .collect();
        sources.sort_by_key(|room| self.is_gated(room.id));
        sources
    }

    /// Room glyphs laid out on the grid; `None` marks empty space.
    pub fn glyphs(&self) -> &Grid<Option<char>> {
        &self.glyphs
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::mansion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rooms_have_unique_positions_inside_grid() {
        let catalog = RoomCatalog::mansion();
        let positions: HashSet<Position> = catalog.rooms().iter().map(|r| r.position).collect();
        assert_eq!(positions.len(), 10);
        assert!(positions.iter().all(|p| catalog.glyphs().contains(*p)));
    }

    #[test]
    fn test_ids_match_indices() {
        let catalog = RoomCatalog::mansion();
        for (index, room) in catalog.rooms().iter().enumerate() {
            assert_eq!(room.id, RoomId(index));
            assert_eq!(catalog.get(room.id), Some(room));
        }
        assert_eq!(catalog.get(RoomId(10)), None);
    }

    #[test]
    fn test_room_at() {
        let catalog = RoomCatalog::mansion();
        assert_eq!(
            catalog.room_at(Position::new(3, 3)).map(|r| r.name),
            Some("Library")
        );
        assert!(catalog.room_at(Position::new(3, 5)).is_none());
        assert!(catalog.room_at(Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_gated_rooms() {
        let catalog = RoomCatalog::mansion();
        assert_eq!(catalog.chain_position(MAIN_LABORATORY), Some(0));
        assert_eq!(catalog.chain_position(GARDEN), Some(3));
        assert!(!catalog.is_gated(LIBRARY));
        assert_eq!(catalog.rooms().iter().filter(|r| catalog.is_gated(r.id)).count(), 4);
    }

    #[test]
    fn test_collectible_features() {
        let catalog = RoomCatalog::mansion();
        let lab = catalog.get(MAIN_LABORATORY).unwrap();
        assert_eq!(lab.collectible("broken_keycard"), Some(Item::BrokenKeycard));
        assert_eq!(lab.collectible("chronosphere"), None);
        assert_eq!(lab.collectible("power_core"), None);
    }

    #[test]
    fn test_sources_prefer_ungated_rooms() {
        let catalog = RoomCatalog::mansion();
        let manual: Vec<&str> = catalog
            .sources_of(Item::ResearchManual)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(manual, vec!["Library", "Main Laboratory"]);

        let flower = catalog.sources_of(Item::StrangeFlower);
        assert_eq!(flower[0].name, "Conservatory");
        assert!(catalog.sources_of(Item::TimeShard).is_empty());
    }

    #[test]
    fn test_glyph_layer() {
        let catalog = RoomCatalog::mansion();
        assert_eq!(catalog.glyphs()[Position::new(5, 5)], Some('M'));
        assert_eq!(catalog.glyphs()[Position::new(0, 0)], None);
        assert_eq!(catalog.glyphs().enumerate().filter(|(_, g)| g.is_some()).count(), 10);
    }
}
