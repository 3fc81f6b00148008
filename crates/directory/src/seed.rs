//! The embedded seed catalogue.
//!
//! Deployments without a remote document store ship with this constant set
//! so the catalogue renders out of the box. The records match the
//! production collection's shape exactly.

use crate::types::{LawyerProfile, PriceList};

fn profile(
    id: &str,
    name: &str,
    specializations: &[&str],
    rating: f32,
    reviews: u32,
    experience: u32,
    is_online: bool,
    pricing: PriceList,
    avatar: &str,
    connections: u32,
    verified: bool,
) -> LawyerProfile {
    LawyerProfile {
        id: id.to_string(),
        name: name.to_string(),
        specializations: specializations.iter().map(|tag| tag.to_string()).collect(),
        rating,
        reviews,
        experience,
        is_online,
        pricing,
        avatar: avatar.to_string(),
        connections,
        verified,
    }
}

/// The eight-profile starter catalogue.
pub fn seed_profiles() -> Vec<LawyerProfile> {
    vec![
        profile(
            "1",
            "Kausik Chatterjee",
            &["Commercial", "Civil", "Corporate"],
            4.9,
            1121,
            15,
            true,
            PriceList { audio: 20, video: 10, chat: 15 },
            "KC",
            0,
            true,
        ),
        profile(
            "2",
            "Priya Sharma",
            &["Family", "Criminal", "Property"],
            4.7,
            856,
            12,
            true,
            PriceList { audio: 25, video: 15, chat: 18 },
            "PS",
            234,
            true,
        ),
        profile(
            "3",
            "Rajesh Kumar",
            &["Tax", "Corporate", "Intellectual Property"],
            4.8,
            692,
            18,
            false,
            PriceList { audio: 30, video: 20, chat: 22 },
            "RK",
            567,
            true,
        ),
        profile(
            "4",
            "Anita Desai",
            &["Employment", "Labor", "Contract"],
            4.6,
            423,
            8,
            true,
            PriceList { audio: 18, video: 12, chat: 14 },
            "AD",
            89,
            false,
        ),
        profile(
            "5",
            "Vikram Singh",
            &["Criminal", "Civil Rights", "Immigration"],
            4.9,
            1523,
            22,
            true,
            PriceList { audio: 35, video: 25, chat: 28 },
            "VS",
            892,
            true,
        ),
        profile(
            "6",
            "Meera Gupta",
            &["Environmental", "Public Interest", "NGO"],
            4.5,
            234,
            6,
            false,
            PriceList { audio: 15, video: 8, chat: 12 },
            "MG",
            45,
            true,
        ),
        profile(
            "7",
            "Arjun Patel",
            &["Real Estate", "Construction", "Banking"],
            4.8,
            967,
            14,
            true,
            PriceList { audio: 28, video: 18, chat: 20 },
            "AP",
            445,
            true,
        ),
        profile(
            "8",
            "Sunita Rao",
            &["Healthcare", "Medical Malpractice", "Insurance"],
            4.7,
            678,
            11,
            true,
            PriceList { audio: 22, video: 14, chat: 16 },
            "SR",
            234,
            true,
        ),
    ]
}
