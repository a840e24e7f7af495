/// A bookable area of the portal with the prefix its room names share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub name: &'static str,
    pub id: u32,
    pub room_prefix: &'static str,
}

/// A study room and the id the portal uses for `rooms[]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub name: &'static str,
    pub id: u32,
}

pub const AREAS: [Area; 6] = [
    Area { name: "Library", id: 1, room_prefix: "LIB" },
    Area { name: "Commons: Floor 0", id: 5, room_prefix: "COM 0" },
    Area { name: "Commons: Floor 1", id: 6, room_prefix: "COM 1" },
    Area { name: "Commons: Floor 3", id: 7, room_prefix: "COM 3" },
    Area { name: "EME: Tower 1", id: 8, room_prefix: "EME 1" },
    Area { name: "EME: Tower 2", id: 9, room_prefix: "EME 2" },
];

pub const ROOMS: [Room; 48] = [
    Room { name: "LIB 121 (4 people)", id: 2 },
    Room { name: "LIB 122 (4)", id: 1 },
    Room { name: "COM 005 (4 people)", id: 12 },
    Room { name: "COM 006 (4)", id: 13 },
    Room { name: "COM 007 (4)", id: 14 },
    Room { name: "COM 008 (4)", id: 15 },
    Room { name: "COM 108 (4 people)", id: 16 },
    Room { name: "COM 109 (4)", id: 17 },
    Room { name: "COM 110 (10)", id: 18 },
    Room { name: "COM 111 (10)", id: 19 },
    Room { name: "COM 112 (6)", id: 20 },
    Room { name: "COM 113 (4)", id: 21 },
    Room { name: "COM 114 (6)", id: 22 },
    Room { name: "COM 115 (4)", id: 23 },
    Room { name: "COM 116 (6)", id: 24 },
    Room { name: "COM 117 (6)", id: 25 },
    Room { name: "COM 118 (6)", id: 26 },
    Room { name: "COM 119 (6)", id: 27 },
    Room { name: "COM 120 (6)", id: 28 },
    Room { name: "COM 301 (4 people)", id: 30 },
    Room { name: "COM 302 (4)", id: 31 },
    Room { name: "COM 303 (4)", id: 32 },
    Room { name: "COM 304 (4)", id: 33 },
    Room { name: "COM 305 (6)", id: 34 },
    Room { name: "COM 306 (4)", id: 35 },
    Room { name: "COM 307 (6)", id: 36 },
    Room { name: "COM 308 (4)", id: 37 },
    Room { name: "COM 309 (6)", id: 38 },
    Room { name: "COM 312 (4)", id: 39 },
    Room { name: "COM 314 (4)", id: 40 },
    Room { name: "COM 316 (4)", id: 41 },
    Room { name: "COM 318 (4)", id: 42 },
    Room { name: "EME 1162 (10 people)", id: 54 },
    Room { name: "EME 1163 (6)", id: 55 },
    Room { name: "EME 1164 (6)", id: 56 },
    Room { name: "EME 1165 (6)", id: 57 },
    Room { name: "EME 1166 (6)", id: 58 },
    Room { name: "EME 1167 (6)", id: 59 },
    Room { name: "EME 1168 (6)", id: 60 },
    Room { name: "EME 1252 (10 people)", id: 43 },
    Room { name: "EME 1254 (8)", id: 44 },
    Room { name: "EME 2242 (8)", id: 46 },
    Room { name: "EME 2244 (8)", id: 48 },
    Room { name: "EME 2246 (8)", id: 49 },
    Room { name: "EME 2248 (8)", id: 50 },
    Room { name: "EME 2252 (8)", id: 51 },
    Room { name: "EME 2254 (8)", id: 52 },
    Room { name: "EME 2257 (10)", id: 53 },
];

pub fn area_by_id(id: u32) -> Option<&'static Area> {
    AREAS.iter().find(|area| area.id == id)
}

pub fn area_by_name(name: &str) -> Option<&'static Area> {
    AREAS.iter().find(|area| area.name.eq_ignore_ascii_case(name))
}

pub fn room_by_id(id: u32) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

impl Area {
    /// Rooms whose names start with this area's prefix.
    pub fn rooms(&self) -> impl Iterator<Item = &'static Room> + '_ {
        ROOMS
            .iter()
            .filter(move |room| room.name.starts_with(self.room_prefix))
    }

    pub fn contains(&self, room_id: u32) -> bool {
        self.rooms().any(|room| room.id == room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commons_floor_one_lists_only_its_rooms() {
        let area = area_by_name("commons: floor 1").unwrap();
        let names: Vec<_> = area.rooms().map(|r| r.name).collect();
        assert_eq!(names.len(), 13);
        assert!(names.iter().all(|n| n.starts_with("COM 1")));
        assert!(area.contains(23));
        assert!(!area.contains(2));
    }

    #[test]
    fn library_rooms_resolve_by_id() {
        let library = area_by_id(1).unwrap();
        assert_eq!(library.rooms().count(), 2);
        assert_eq!(room_by_id(2).map(|r| r.name), Some("LIB 121 (4 people)"));
        assert!(room_by_id(45).is_none());
    }

    #[test]
    fn eme_towers_do_not_overlap() {
        let t1 = area_by_id(8).unwrap();
        let t2 = area_by_id(9).unwrap();
        assert!(t1.rooms().all(|r| !t2.contains(r.id)));
        assert_eq!(t1.rooms().count() + t2.rooms().count(), 16);
    }
}
