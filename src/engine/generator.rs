// ==========================================
// 朝觐住宿管理系统 - 合成数据生成器
// ==========================================
// 职责: 按生成配置产出初始酒店/楼栋/帐篷/名册集合
// 约定: 相同种子产出相同的结构与占用分布
//       （记录 ID 仍为随机 UUID,不参与种子）
// ==========================================

use crate::config::generation::GenerationConfig;
use crate::domain::housing::{Bed, Building, Hotel, Room, ROOM_MAX_BEDS, ROOM_MIN_BEDS};
use crate::domain::pilgrim::{Pilgrim, RoomAssignment, TentAssignment};
use crate::domain::tent::{Tent, TENT_MAX_BEDS, TENT_MIN_BEDS};
use crate::domain::types::{Gender, HousingKind, RoomGender, TentLocation};
use crate::engine::inventory::synthetic_bed_id;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

// ==========================================
// 名称样本池
// ==========================================

static MALE_GIVEN_NAMES: &[&str] = &[
    "Ahmad", "Mohammed", "Omar", "Yusuf", "Ibrahim", "Khalid", "Hassan", "Hussein", "Bilal",
    "Tariq", "Salman", "Faisal", "Hamza", "Zaid", "Anas", "Mustafa", "Imran", "Adnan",
];

static FEMALE_GIVEN_NAMES: &[&str] = &[
    "Fatima", "Aisha", "Khadija", "Maryam", "Zainab", "Sara", "Amina", "Hafsa", "Layla",
    "Noor", "Salma", "Ruqayya", "Sumaya", "Asma", "Huda", "Rania",
];

static FAMILY_NAMES: &[&str] = &[
    "Al-Farsi", "Hassan", "Khan", "Rahman", "Abdullah", "Al-Amin", "Siddiqui", "Yilmaz",
    "Demir", "Suleiman", "Al-Najjar", "Haddad", "Mansour", "Qureshi", "Osman", "Bakr",
];

static NATIONALITIES: &[&str] = &["SA", "EG", "PK", "ID", "TR", "MY", "NG", "MA", "BD", "IN"];

static HOTEL_NAMES: &[&str] = &[
    "Al Safa Hotel", "Dar Al Tawhid", "Al Marwa Residence", "Jabal Omar Suites",
    "Al Noor Palace", "Misfalah Grand", "Ajyad Plaza", "Al Kiswah Inn",
];

static BUILDING_NAMES: &[&str] = &[
    "Aziziyah Block", "Shisha Building", "Rusaifah Tower", "Al Awali Complex",
    "Kudai Residence", "Al Hindawiyah Block",
];

// ==========================================
// GeneratedData - 生成结果
// ==========================================
#[derive(Debug, Clone)]
pub struct GeneratedData {
    pub hotels: Vec<Hotel>,
    pub buildings: Vec<Building>,
    pub tents: Vec<Tent>,
    pub pilgrims: Vec<Pilgrim>,
}

/// 按配置与种子生成初始数据
///
/// 生成顺序: 名册 → 住宿单元 → 占用抽样（床位与反向链接同批写入）
pub fn generate(config: &GenerationConfig, seed: u64) -> GeneratedData {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut pilgrims = generate_pilgrims(config.pilgrim_count, &mut rng);
    let mut hotels = generate_hotels(config, &mut rng);
    let mut buildings = generate_buildings(config, &mut rng);
    let mut tents = generate_tents(config, &mut rng);

    let rate = config.clamped_occupancy_rate();
    for hotel in &mut hotels {
        let parent_id = hotel.id.clone();
        for room in &mut hotel.rooms {
            occupy_room(room, HousingKind::Hotel, &parent_id, rate, &mut pilgrims, &mut rng);
        }
    }
    for building in &mut buildings {
        let parent_id = building.id.clone();
        for room in &mut building.rooms {
            occupy_room(room, HousingKind::Building, &parent_id, rate, &mut pilgrims, &mut rng);
        }
    }
    for tent in &mut tents {
        occupy_tent(tent, rate, &mut pilgrims, &mut rng);
    }

    GeneratedData {
        hotels,
        buildings,
        tents,
        pilgrims,
    }
}

/// 生成朝觐者名册
fn generate_pilgrims(count: u32, rng: &mut StdRng) -> Vec<Pilgrim> {
    (0..count)
        .map(|i| {
            let gender = if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            };
            let given = match gender {
                Gender::Male => MALE_GIVEN_NAMES[rng.gen_range(0..MALE_GIVEN_NAMES.len())],
                Gender::Female => FEMALE_GIVEN_NAMES[rng.gen_range(0..FEMALE_GIVEN_NAMES.len())],
            };
            let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
            let nationality = NATIONALITIES[rng.gen_range(0..NATIONALITIES.len())];

            let mut pilgrim = Pilgrim::new(
                Uuid::new_v4().to_string(),
                format!("{} {}", given, family),
                gender,
                rng.gen_range(18..76),
                nationality,
            );
            pilgrim.phone = Some(format!("+966-5{:08}", rng.gen_range(0..100_000_000u64)));
            if rng.gen_bool(0.6) {
                pilgrim.email = Some(format!(
                    "{}.{}@example.org",
                    given.to_lowercase(),
                    family.to_lowercase().replace('-', "")
                ));
            }
            pilgrim.organizer = Some(format!("ORG-{:03}", rng.gen_range(1..40)));
            pilgrim.group = Some(format!("Group {}", (b'A' + (i % 8) as u8) as char));
            pilgrim.passport_number = Some(format!("P{:08}", rng.gen_range(0..100_000_000u64)));
            pilgrim.visa_number = Some(format!("V{:07}", rng.gen_range(0..10_000_000u64)));
            pilgrim
        })
        .collect()
}

/// 生成酒店（房间初始全空床）
fn generate_hotels(config: &GenerationConfig, rng: &mut StdRng) -> Vec<Hotel> {
    (0..config.hotel_count)
        .map(|i| {
            let id = Uuid::new_v4().to_string();
            let name = HOTEL_NAMES[i as usize % HOTEL_NAMES.len()].to_string();
            let rooms = generate_rooms(&id, config.rooms_per_hotel, rng);
            Hotel {
                id,
                name,
                stars: Some(rng.gen_range(3..=5)),
                rooms,
            }
        })
        .collect()
}

/// 生成楼栋
fn generate_buildings(config: &GenerationConfig, rng: &mut StdRng) -> Vec<Building> {
    (0..config.building_count)
        .map(|i| {
            let id = Uuid::new_v4().to_string();
            let name = BUILDING_NAMES[i as usize % BUILDING_NAMES.len()].to_string();
            let rooms = generate_rooms(&id, config.rooms_per_building, rng);
            let floors = rooms.iter().filter_map(|r| r.floor).max().unwrap_or(1) as u32;
            Building {
                id,
                name,
                floors: Some(floors),
                rooms,
            }
        })
        .collect()
}

/// 生成房间集合: 每层 8 间,房号 {楼层}{两位序号}
fn generate_rooms(parent_id: &str, count: u32, rng: &mut StdRng) -> Vec<Room> {
    const ROOMS_PER_FLOOR: u32 = 8;

    (0..count)
        .map(|i| {
            let floor = (i / ROOMS_PER_FLOOR) as i32 + 1;
            let number_on_floor = i % ROOMS_PER_FLOOR + 1;
            let id = Uuid::new_v4().to_string();
            let total_beds = rng.gen_range(ROOM_MIN_BEDS..=ROOM_MAX_BEDS);
            let gender = match rng.gen_range(0..10) {
                0 => RoomGender::Mixed, // 少量家庭房
                n if n < 5 => RoomGender::Male,
                _ => RoomGender::Female,
            };
            let beds = (0..total_beds as usize)
                .map(|b| Bed::empty(synthetic_bed_id(&id, b)))
                .collect();
            Room {
                id,
                room_number: format!("{}{:02}", floor, number_on_floor),
                total_beds,
                beds,
                gender,
                floor: Some(floor),
                parent_id: parent_id.to_string(),
            }
        })
        .collect()
}

/// 生成两营地帐篷: 编号 M-001 / A-001,分区 A-D
fn generate_tents(config: &GenerationConfig, rng: &mut StdRng) -> Vec<Tent> {
    let mut tents = Vec::new();
    for location in [TentLocation::Mina, TentLocation::Arafat] {
        let prefix = match location {
            TentLocation::Mina => "M",
            TentLocation::Arafat => "A",
        };
        for i in 0..config.tents_per_camp {
            let id = Uuid::new_v4().to_string();
            let total_beds = rng.gen_range(TENT_MIN_BEDS..=TENT_MAX_BEDS);
            let beds = (0..total_beds as usize)
                .map(|b| Bed::empty(synthetic_bed_id(&id, b)))
                .collect();
            tents.push(Tent {
                id,
                tent_number: format!("{}-{:03}", prefix, i + 1),
                total_beds,
                beds,
                location,
                section: Some(((b'A' + (i % 4) as u8) as char).to_string()),
            });
        }
    }
    tents
}

/// 房间占用抽样: 按房间性别挑选合适的未分配朝觐者
fn occupy_room(
    room: &mut Room,
    kind: HousingKind,
    parent_id: &str,
    rate: f64,
    pilgrims: &mut [Pilgrim],
    rng: &mut StdRng,
) {
    for bed in &mut room.beds {
        if !rng.gen_bool(rate) {
            continue;
        }
        let wanted = match room.gender {
            RoomGender::Male => Some(Gender::Male),
            RoomGender::Female => Some(Gender::Female),
            RoomGender::Mixed => None,
        };
        let Some(pilgrim) = pilgrims
            .iter_mut()
            .find(|p| p.is_unassigned() && wanted.map_or(true, |g| p.gender == g))
        else {
            return; // 名册耗尽
        };

        bed.occupy(pilgrim);
        pilgrim.assigned_room = Some(RoomAssignment {
            housing_type: kind,
            parent_id: parent_id.to_string(),
            room_id: room.id.clone(),
            room_number: room.room_number.clone(),
            bed_id: bed.id.clone(),
        });
    }
}

/// 帐篷占用抽样
fn occupy_tent(tent: &mut Tent, rate: f64, pilgrims: &mut [Pilgrim], rng: &mut StdRng) {
    for bed in &mut tent.beds {
        if !rng.gen_bool(rate) {
            continue;
        }
        let Some(pilgrim) = pilgrims.iter_mut().find(|p| p.is_unassigned()) else {
            return;
        };

        bed.occupy(pilgrim);
        pilgrim.assigned_tent = Some(TentAssignment {
            location: tent.location,
            tent_id: tent.id.clone(),
            tent_number: tent.tent_number.clone(),
            bed_id: bed.id.clone(),
        });
    }
}
