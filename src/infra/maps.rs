//! Static catalog of playable locations. Bundled with the app, never fetched.

use crate::domain::GameMap;

const fn map(
    name: &'static str,
    short_name: &'static str,
    file_name: &'static str,
    file_thumbnail: &'static str,
) -> GameMap {
    GameMap {
        name,
        short_name,
        file_name,
        file_thumbnail,
        aspect_ratio: (0, 0),
    }
}

static MAPS: [GameMap; 11] = [
    map("Customs", "customs", "customs.webp", "customs_thumbnail.webp"),
    map("Factory", "factory", "factory.webp", "factory_thumbnail.webp"),
    map("Ground Zero", "zero", "ground_zero.webp", "ground_zero_thumbnail.webp"),
    map("Interchange", "interchange", "interchange.webp", "interchange_thumbnail.webp"),
    map("Labyrinth", "labyrinth", "labyrinth.webp", "labyrinth_thumbnail.webp"),
    map("Lighthouse", "lighthouse", "lighthouse.webp", "lighthouse_thumbnail.webp"),
    map("Reserve", "reserve", "reserve.webp", "reserve_thumbnail.webp"),
    map("Shoreline", "shoreline", "shoreline.webp", "shoreline_thumbnail.webp"),
    map(
        "Streets of Tarkov",
        "streets",
        "streets_of_tarkov.webp",
        "streets_of_tarkov_thumbnail.webp",
    ),
    map("Woods", "woods", "woods.webp", "woods_thumbnail.webp"),
    map("Labs", "labs", "labs.webp", "labs_thumbnail.webp"),
];

pub fn all_maps() -> &'static [GameMap] {
    &MAPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_fixed() {
        let first = all_maps();
        let second = all_maps();

        assert_eq!(first.len(), 11);
        assert_eq!(first, second);
        assert_eq!(first[0].name, "Customs");
        assert_eq!(first[10].short_name, "labs");
        assert!(first.iter().all(|m| m.aspect_ratio == (0, 0)));
    }

    #[test]
    fn short_names_are_unique() {
        let mut names: Vec<_> = all_maps().iter().map(|m| m.short_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
    }
}
