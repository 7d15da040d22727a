// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use hajj_housing_admin::domain::housing::{Bed, Hotel, Room};
use hajj_housing_admin::domain::pilgrim::Pilgrim;
use hajj_housing_admin::domain::tent::Tent;
use hajj_housing_admin::domain::types::{Gender, RoomGender, TentLocation};

// ==========================================
// Pilgrim 构建器
// ==========================================

pub struct PilgrimBuilder {
    id: String,
    name: String,
    gender: Gender,
    age: u32,
    nationality: String,
    phone: Option<String>,
    email: Option<String>,
    organizer: Option<String>,
    passport_number: Option<String>,
    visa_number: Option<String>,
}

impl PilgrimBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            gender: Gender::Male,
            age: 40,
            nationality: "SA".to_string(),
            phone: None,
            email: None,
            organizer: None,
            passport_number: None,
            visa_number: None,
        }
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn nationality(mut self, nationality: &str) -> Self {
        self.nationality = nationality.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn organizer(mut self, organizer: &str) -> Self {
        self.organizer = Some(organizer.to_string());
        self
    }

    pub fn passport(mut self, passport: &str) -> Self {
        self.passport_number = Some(passport.to_string());
        self
    }

    pub fn visa(mut self, visa: &str) -> Self {
        self.visa_number = Some(visa.to_string());
        self
    }

    pub fn build(self) -> Pilgrim {
        let mut pilgrim = Pilgrim::new(self.id, self.name, self.gender, self.age, self.nationality);
        pilgrim.phone = self.phone;
        pilgrim.email = self.email;
        pilgrim.organizer = self.organizer;
        pilgrim.passport_number = self.passport_number;
        pilgrim.visa_number = self.visa_number;
        pilgrim
    }
}

// ==========================================
// Room 构建器
// ==========================================

pub struct RoomBuilder {
    id: String,
    room_number: String,
    total_beds: u32,
    gender: RoomGender,
    floor: Option<i32>,
    parent_id: String,
    occupants: Vec<Pilgrim>,
    stored_beds: Option<usize>,
}

impl RoomBuilder {
    pub fn new(id: &str, room_number: &str) -> Self {
        Self {
            id: id.to_string(),
            room_number: room_number.to_string(),
            total_beds: 4,
            gender: RoomGender::Mixed,
            floor: Some(1),
            parent_id: "H1".to_string(),
            occupants: Vec::new(),
            stored_beds: None,
        }
    }

    pub fn total_beds(mut self, total: u32) -> Self {
        self.total_beds = total;
        self
    }

    pub fn gender(mut self, gender: RoomGender) -> Self {
        self.gender = gender;
        self
    }

    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn parent(mut self, parent_id: &str) -> Self {
        self.parent_id = parent_id.to_string();
        self
    }

    /// 依次占用床位
    pub fn occupant(mut self, pilgrim: &Pilgrim) -> Self {
        self.occupants.push(pilgrim.clone());
        self
    }

    /// 存储的床位数（缺省等于 totalBeds;用于构造偏短/偏长的脏数据）
    pub fn stored_beds(mut self, count: usize) -> Self {
        self.stored_beds = Some(count);
        self
    }

    pub fn build(self) -> Room {
        let stored = self.stored_beds.unwrap_or(self.total_beds as usize);
        let mut beds: Vec<Bed> = (0..stored)
            .map(|i| Bed::empty(format!("{}-bed-{}", self.id, i + 1)))
            .collect();
        for (i, pilgrim) in self.occupants.iter().enumerate() {
            if let Some(bed) = beds.get_mut(i) {
                bed.occupy(pilgrim);
            }
        }
        Room {
            id: self.id,
            room_number: self.room_number,
            total_beds: self.total_beds,
            beds,
            gender: self.gender,
            floor: self.floor,
            parent_id: self.parent_id,
        }
    }
}

// ==========================================
// Tent 构建器
// ==========================================

pub struct TentBuilder {
    id: String,
    tent_number: String,
    total_beds: u32,
    location: TentLocation,
    section: Option<String>,
    occupants: Vec<Pilgrim>,
    stored_beds: Option<usize>,
}

impl TentBuilder {
    pub fn new(id: &str, tent_number: &str) -> Self {
        Self {
            id: id.to_string(),
            tent_number: tent_number.to_string(),
            total_beds: 10,
            location: TentLocation::Mina,
            section: Some("A".to_string()),
            occupants: Vec::new(),
            stored_beds: None,
        }
    }

    pub fn total_beds(mut self, total: u32) -> Self {
        self.total_beds = total;
        self
    }

    pub fn location(mut self, location: TentLocation) -> Self {
        self.location = location;
        self
    }

    pub fn section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    pub fn occupant(mut self, pilgrim: &Pilgrim) -> Self {
        self.occupants.push(pilgrim.clone());
        self
    }

    pub fn stored_beds(mut self, count: usize) -> Self {
        self.stored_beds = Some(count);
        self
    }

    pub fn build(self) -> Tent {
        let stored = self.stored_beds.unwrap_or(self.total_beds as usize);
        let mut beds: Vec<Bed> = (0..stored)
            .map(|i| Bed::empty(format!("{}-bed-{}", self.id, i + 1)))
            .collect();
        for (i, pilgrim) in self.occupants.iter().enumerate() {
            if let Some(bed) = beds.get_mut(i) {
                bed.occupy(pilgrim);
            }
        }
        Tent {
            id: self.id,
            tent_number: self.tent_number,
            total_beds: self.total_beds,
            beds,
            location: self.location,
            section: self.section,
        }
    }
}

// ==========================================
// Hotel 构建器
// ==========================================

pub struct HotelBuilder {
    id: String,
    name: String,
    stars: Option<u8>,
    rooms: Vec<Room>,
}

impl HotelBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            stars: Some(4),
            rooms: Vec::new(),
        }
    }

    pub fn room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    pub fn build(self) -> Hotel {
        Hotel {
            id: self.id,
            name: self.name,
            stars: self.stars,
            rooms: self.rooms,
        }
    }
}
