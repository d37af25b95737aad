use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scamper_core::geometry::Aabb;
use scamper_core::level::{
    EnemyKind, EnemySpawn, Hazard, Level, MovingSpec, PatrolBounds, Platform, PlatformKind,
    Powerup,
};

/// Generated level footprint.
pub const LEVEL_WIDTH: f32 = 3200.0;
pub const LEVEL_HEIGHT: f32 = 600.0;
/// Top of the ground slab.
const GROUND_Y: f32 = 560.0;
const GROUND_THICKNESS: f32 = 40.0;
/// Bodies below this line fall out of the level.
const KILL_PLANE: f32 = 700.0;
/// Horizontal slice of level filled per section.
const SECTION_WIDTH: f32 = 320.0;
const NUM_SECTIONS: u32 = 10;
/// Section reserved for the ferry gap and its moving platform.
const FERRY_SECTION: u32 = 6;
/// Widest ground pit a full-speed jump clears with margin.
const MAX_PIT_WIDTH: f32 = 150.0;

const POWERUP_SIZE: f32 = 24.0;

/// Generate a deterministic level from a seed. The first section is kept
/// flat around the spawn point; every other section draws one of a few
/// terrain patterns, and one mid-level section always carries a gap too
/// wide to jump with a moving platform ferrying across it.
pub fn generate_level(seed: u64) -> Level {
    let mut rng = StdRng::seed_from_u64(seed);

    let themes = ["meadow", "cavern", "glacier"];
    let theme = themes[rng.random_range(0..themes.len())].to_string();

    let mut level = Level {
        width: LEVEL_WIDTH,
        height: LEVEL_HEIGHT,
        kill_plane: KILL_PLANE,
        spawn_x: 100.0,
        spawn_y: 400.0,
        theme,
        platforms: Vec::new(),
        hazards: Vec::new(),
        powerups: Vec::new(),
        enemies: Vec::new(),
    };

    // Pits carved out of the ground slab, in ascending x order.
    let mut pits: Vec<(f32, f32)> = Vec::new();

    for section in 1..NUM_SECTIONS {
        let base_x = section as f32 * SECTION_WIDTH;
        if section == FERRY_SECTION {
            carve_ferry_gap(&mut level, &mut pits, base_x);
        } else {
            generate_section(&mut level, &mut rng, &mut pits, base_x);
        }
    }

    // Ground slab minus the pits.
    let mut cursor = 0.0;
    for &(pit_x, pit_w) in &pits {
        if pit_x > cursor {
            push_ground(&mut level, cursor, pit_x);
        }
        cursor = pit_x + pit_w;
    }
    if cursor < LEVEL_WIDTH {
        push_ground(&mut level, cursor, LEVEL_WIDTH);
    }

    level
}

fn push_ground(level: &mut Level, start_x: f32, end_x: f32) {
    level.platforms.push(Platform {
        rect: Aabb::new(start_x, GROUND_Y, end_x - start_x, GROUND_THICKNESS),
        kind: PlatformKind::Normal,
    });
}

fn generate_section(level: &mut Level, rng: &mut StdRng, pits: &mut Vec<(f32, f32)>, base_x: f32) {
    match rng.random_range(0u8..5) {
        0 => {
            // Pit in the ground, jumpable at full run speed.
            let pit_w = rng.random_range(90.0..MAX_PIT_WIDTH);
            let pit_x = base_x + rng.random_range(40.0..SECTION_WIDTH - MAX_PIT_WIDTH - 40.0);
            pits.push((pit_x, pit_w));
        },
        1 => {
            // Raised shelf with a pickup, sometimes iced over.
            let shelf_w = rng.random_range(100.0..180.0);
            let shelf_x = base_x + rng.random_range(20.0..SECTION_WIDTH - 200.0);
            let shelf_y = rng.random_range(400.0..470.0);
            let kind = if rng.random_bool(0.25) {
                PlatformKind::Ice
            } else {
                PlatformKind::Normal
            };
            level.platforms.push(Platform {
                rect: Aabb::new(shelf_x, shelf_y, shelf_w, 20.0),
                kind,
            });
            level.powerups.push(Powerup {
                rect: Aabb::new(
                    shelf_x + (shelf_w - POWERUP_SIZE) / 2.0,
                    shelf_y - POWERUP_SIZE - 4.0,
                    POWERUP_SIZE,
                    POWERUP_SIZE,
                ),
            });
            if rng.random_bool(0.5) {
                let (_, h) = EnemyKind::Fast.size();
                level.enemies.push(EnemySpawn {
                    kind: EnemyKind::Fast,
                    x: shelf_x + shelf_w / 2.0,
                    y: shelf_y - h,
                    patrol: Some(PatrolBounds {
                        left: shelf_x,
                        right: shelf_x + shelf_w,
                    }),
                });
            }
        },
        2 => {
            // Staircase with a jumper lurking at its foot.
            for step in 0..3u32 {
                let x = base_x + 40.0 + step as f32 * 90.0;
                let y = 480.0 - step as f32 * 60.0;
                level.platforms.push(Platform {
                    rect: Aabb::new(x, y, 80.0, 20.0),
                    kind: PlatformKind::Normal,
                });
            }
            let (_, h) = EnemyKind::Jumper.size();
            level.enemies.push(EnemySpawn {
                kind: EnemyKind::Jumper,
                x: base_x + 200.0,
                y: GROUND_Y - h,
                patrol: None,
            });
        },
        3 => {
            // A pair of one-way clouds, prize on the upper one.
            let cloud_x = base_x + rng.random_range(30.0..90.0);
            level.platforms.push(Platform {
                rect: Aabb::new(cloud_x, 440.0, 90.0, 16.0),
                kind: PlatformKind::Cloud,
            });
            level.platforms.push(Platform {
                rect: Aabb::new(cloud_x + 120.0, 350.0, 90.0, 16.0),
                kind: PlatformKind::Cloud,
            });
            level.powerups.push(Powerup {
                rect: Aabb::new(
                    cloud_x + 120.0 + (90.0 - POWERUP_SIZE) / 2.0,
                    350.0 - POWERUP_SIZE - 4.0,
                    POWERUP_SIZE,
                    POWERUP_SIZE,
                ),
            });
        },
        _ => {
            // Spike strip on the ground with a platform bridging it.
            let strip_w = rng.random_range(60.0..100.0);
            let strip_x = base_x + rng.random_range(60.0..SECTION_WIDTH - 160.0);
            level.hazards.push(Hazard {
                rect: Aabb::new(strip_x, GROUND_Y - 16.0, strip_w, 16.0),
            });
            level.platforms.push(Platform {
                rect: Aabb::new(strip_x - 20.0, 450.0, strip_w + 40.0, 16.0),
                kind: PlatformKind::Normal,
            });
            if rng.random_bool(0.6) {
                let (_, h) = EnemyKind::Basic.size();
                level.enemies.push(EnemySpawn {
                    kind: EnemyKind::Basic,
                    x: base_x + 150.0,
                    y: GROUND_Y - h,
                    patrol: Some(PatrolBounds {
                        left: base_x + 10.0,
                        right: base_x + SECTION_WIDTH - 10.0,
                    }),
                });
            }
        },
    }
}

/// A gap too wide to jump, crossed by riding the ferry platform. The ferry
/// overlaps both ledges at its endpoints so riders can board and alight.
fn carve_ferry_gap(level: &mut Level, pits: &mut Vec<(f32, f32)>, base_x: f32) {
    let gap_x = base_x + 60.0;
    let gap_w = 200.0;
    pits.push((gap_x, gap_w));

    let origin_x = gap_x - 20.0;
    level.platforms.push(Platform {
        rect: Aabb::new(origin_x, 500.0, 100.0, 16.0),
        kind: PlatformKind::Moving(MovingSpec {
            to_x: origin_x + gap_w + 40.0,
            to_y: 500.0,
            speed: 1.25,
        }),
    });
}
