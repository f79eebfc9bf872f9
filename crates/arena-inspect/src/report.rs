use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::path::Path;

use arena_level::Level;

/// Summary of a decoded level, stable enough to diff between runs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LevelDigest {
    pub pack: String,
    pub mode: String,
    pub name: String,
    pub inf_name: String,
    pub dims: [usize; 3],
    pub definitions: usize,
    /// Definition count per variant name.
    pub variants: BTreeMap<String, usize>,
    pub occupied_voxels: usize,
    pub flat_kinds: usize,
    pub flat_instances: usize,
    pub menu_names: Vec<String>,
    pub locks: usize,
    pub grid_hash: u64,
}

/// Deterministic hash over the grid and the definitions its ids point at.
///
/// Definitions are hashed through their debug form since the platform
/// variants carry floats.
pub fn compute_grid_hash(level: &Level) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    let grid = level.grid();

    grid.width().hash(&mut hasher);
    grid.height().hash(&mut hasher);
    grid.depth().hash(&mut hasher);
    grid.voxels().hash(&mut hasher);

    for (id, def) in level.defs().iter() {
        id.hash(&mut hasher);
        format!("{:?}", def).hash(&mut hasher);
    }

    hasher.finish()
}

impl LevelDigest {
    pub fn from_level(pack: &str, mode: &str, level: &Level) -> Self {
        let grid = level.grid();

        let mut variants = BTreeMap::new();
        for (_, def) in level.defs().iter() {
            *variants.entry(def.kind_name().to_string()).or_insert(0) += 1;
        }

        let menu_names = level
            .menu_names()
            .iter()
            .map(|m| format!("({}, {}) {}", m.position.x, m.position.y, m.name))
            .collect();

        Self {
            pack: pack.to_string(),
            mode: mode.to_string(),
            name: level.name.clone(),
            inf_name: level.inf_name.clone(),
            dims: [grid.width(), grid.height(), grid.depth()],
            definitions: level.defs().len(),
            variants,
            occupied_voxels: grid.occupied_count(),
            flat_kinds: level.flats().entries().len(),
            flat_instances: level.flats().instance_count(),
            menu_names,
            locks: level.locks().len(),
            grid_hash: compute_grid_hash(level),
        }
    }
}

/// Load a saved digest. Returns None if the file is missing or unreadable.
pub fn load_baseline(path: &Path) -> Option<LevelDigest> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

pub fn save_baseline(path: &Path, digest: &LevelDigest) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(digest).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Fields that differ between a fresh digest and a baseline, as
/// (field, baseline value, current value).
pub fn compare(current: &LevelDigest, baseline: &LevelDigest) -> Vec<(String, String, String)> {
    let mut diffs = Vec::new();
    let mut check = |field: &str, base: String, cur: String| {
        if base != cur {
            diffs.push((field.to_string(), base, cur));
        }
    };

    check("mode", baseline.mode.clone(), current.mode.clone());
    check("name", baseline.name.clone(), current.name.clone());
    check("inf_name", baseline.inf_name.clone(), current.inf_name.clone());
    check("dims", format!("{:?}", baseline.dims), format!("{:?}", current.dims));
    check(
        "definitions",
        baseline.definitions.to_string(),
        current.definitions.to_string(),
    );
    check(
        "variants",
        format!("{:?}", baseline.variants),
        format!("{:?}", current.variants),
    );
    check(
        "occupied_voxels",
        baseline.occupied_voxels.to_string(),
        current.occupied_voxels.to_string(),
    );
    check(
        "flat_instances",
        baseline.flat_instances.to_string(),
        current.flat_instances.to_string(),
    );
    check(
        "menu_names",
        baseline.menu_names.len().to_string(),
        current.menu_names.len().to_string(),
    );
    for (i, (base, cur)) in baseline.menu_names.iter().zip(&current.menu_names).enumerate() {
        check(&format!("menu_names[{i}]"), base.clone(), cur.clone());
    }
    check("locks", baseline.locks.to_string(), current.locks.to_string());
    check(
        "grid_hash",
        format!("{:#018x}", baseline.grid_hash),
        format!("{:#018x}", current.grid_hash),
    );

    diffs
}

/// Format a digest as a markdown summary.
pub fn format_markdown(digest: &LevelDigest) -> String {
    let mut out = String::new();
    out.push_str("| Level | INF | Grid | Definitions | Occupied | Flats | Menus | Locks |\n");
    out.push_str("|-------|-----|------|-------------|----------|-------|-------|-------|\n");
    out.push_str(&format!(
        "| {} | {} | {}x{}x{} | {} | {} | {} ({} kinds) | {} | {} |\n",
        digest.name,
        digest.inf_name,
        digest.dims[0],
        digest.dims[1],
        digest.dims[2],
        digest.definitions,
        digest.occupied_voxels,
        digest.flat_instances,
        digest.flat_kinds,
        digest.menu_names.len(),
        digest.locks,
    ));

    out.push_str("\n| Definition | Count |\n");
    out.push_str("|------------|-------|\n");
    for (variant, count) in &digest.variants {
        out.push_str(&format!("| {} | {} |\n", variant, count));
    }

    if !digest.menu_names.is_empty() {
        out.push_str("\nBuildings:\n");
        for name in &digest.menu_names {
            out.push_str(&format!("  - {}\n", name));
        }
    }

    out
}

pub fn format_comparison(diffs: &[(String, String, String)]) -> String {
    if diffs.is_empty() {
        return "Level matches baseline.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("MISMATCHES DETECTED ({}):\n", diffs.len()));
    for (field, base, cur) in diffs {
        out.push_str(&format!("  - {}: {} -> {}\n", field, base, cur));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_pack;

    fn interior_digest() -> LevelDigest {
        let level = arena_world::load_interior(&demo_pack()).expect("interior");
        LevelDigest::from_level("demo", "interior", &level)
    }

    #[test]
    fn test_digest_counts() {
        let digest = interior_digest();
        assert_eq!(digest.dims, [16, 6, 16]);
        assert_eq!(digest.locks, 1);
        assert_eq!(digest.flat_instances, 1);
        assert!(digest.variants.contains_key("Chasm"));
        assert_eq!(digest.variants.get("Door"), Some(&1));
        assert_eq!(digest.variants.get("Raised"), Some(&1));
        assert_eq!(digest.variants.get("Ceiling"), Some(&1));
        assert_eq!(digest.definitions, digest.variants.values().sum::<usize>());
    }

    #[test]
    fn test_grid_hash_is_deterministic() {
        assert_eq!(interior_digest().grid_hash, interior_digest().grid_hash);
    }

    #[test]
    fn test_compare_reports_changed_fields() {
        let baseline = interior_digest();
        assert!(compare(&baseline, &baseline).is_empty());

        let mut current = baseline.clone();
        current.locks = 4;
        current.grid_hash ^= 1;
        let diffs = compare(&current, &baseline);
        let fields: Vec<&str> = diffs.iter().map(|d| d.0.as_str()).collect();
        assert_eq!(fields, vec!["locks", "grid_hash"]);
        assert!(format_comparison(&diffs).starts_with("MISMATCHES DETECTED (2)"));
    }

    #[test]
    fn test_markdown_lists_variants() {
        let text = format_markdown(&interior_digest());
        assert!(text.contains("| DEMOKEEP.MIF | DEMOKEEP.INF | 16x6x16 |"));
        assert!(text.contains("| Door | 1 |"));
    }

    #[test]
    fn test_baseline_round_trip_through_disk() {
        let digest = interior_digest();
        let path = std::env::temp_dir()
            .join(format!("arena-inspect-{}", std::process::id()))
            .join("baseline.json");
        save_baseline(&path, &digest).expect("save");
        assert_eq!(load_baseline(&path), Some(digest));
        let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    }
}
