use serde::{Deserialize, Serialize};

/// What entering a *MENU wall leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuType {
    None,
    CityGates,
    Crypt,
    Dungeon,
    Equipment,
    House,
    MagesGuild,
    Noble,
    Palace,
    Tavern,
    Temple,
    Tower,
}

const CITY_MENU_TYPES: [MenuType; 14] = [
    MenuType::Equipment,
    MenuType::Tavern,
    MenuType::MagesGuild,
    MenuType::Temple,
    MenuType::House,
    MenuType::House,
    MenuType::House,
    MenuType::CityGates,
    MenuType::CityGates,
    MenuType::Noble,
    MenuType::None,
    MenuType::Palace,
    MenuType::Palace,
    MenuType::Palace,
];

const WILD_MENU_TYPES: [MenuType; 10] = [
    MenuType::None,
    MenuType::Crypt,
    MenuType::House,
    MenuType::Tavern,
    MenuType::Temple,
    MenuType::Tower,
    MenuType::CityGates,
    MenuType::CityGates,
    MenuType::Dungeon,
    MenuType::Dungeon,
];

/// Resolve a *MENU id. The same id means different buildings in cities and
/// in the wilderness.
pub fn menu_type(menu_id: i32, is_city: bool) -> MenuType {
    let table: &[MenuType] = if is_city {
        &CITY_MENU_TYPES
    } else {
        &WILD_MENU_TYPES
    };

    match usize::try_from(menu_id).ok().and_then(|i| table.get(i)) {
        Some(&menu_type) => menu_type,
        None => {
            log::warn!("Unknown *MENU id {} (city: {})", menu_id, is_city);
            MenuType::None
        }
    }
}
