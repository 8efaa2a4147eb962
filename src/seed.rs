// One-time demo data population.
//
// Runs after migrations and before the listener starts. Gated by a durable
// marker row so only the process that wins the insert seeds; a second
// instance started concurrently sees the marker and skips.

use sqlx::PgPool;
use thiserror::Error;

use crate::auth::{error::AuthError, password::PasswordService};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

struct SeedCollege {
    name: &'static str,
    location: &'static str,
    description: &'static str,
    rating: f64,
    image: &'static str,
    college_type: &'static str,
    established: i32,
    affiliations: &'static [&'static str],
    courses: &'static [&'static str],
    facilities: &'static [&'static str],
    tuition_fee: f64,
    gallery: &'static [&'static str],
}

const SEED_COLLEGES: &[SeedCollege] = &[
    SeedCollege {
        name: "Stanford University",
        location: "Stanford, California",
        description: "A leading research university with seven schools, Stanford offers a comprehensive education in humanities, sciences, engineering, and more.",
        rating: 4.8,
        image: "/stanford-university-campus.png",
        college_type: "Private University",
        established: 1885,
        affiliations: &["AAU", "APRU", "Pac-12"],
        courses: &["Computer Science", "Engineering", "Business", "Medicine", "Law"],
        facilities: &["Library", "Labs", "Sports Complex", "Cafeteria", "Auditorium"],
        tuition_fee: 55000.0,
        gallery: &[
            "/stanford-university-campus.png",
            "/university-library-interior.png",
            "/university-sports-complex.jpg",
            "/university-lab.jpg",
        ],
    },
    SeedCollege {
        name: "MIT",
        location: "Cambridge, Massachusetts",
        description: "Massachusetts Institute of Technology is a world-renowned institution focused on science, technology, and innovation.",
        rating: 4.9,
        image: "/mit-campus.png",
        college_type: "Private University",
        established: 1861,
        affiliations: &["AAU", "APRU", "COFHE"],
        courses: &["Engineering", "Computer Science", "Physics", "Mathematics", "Economics"],
        facilities: &["Research Labs", "Library", "Sports Center", "Student Center", "Maker Spaces"],
        tuition_fee: 53000.0,
        gallery: &[
            "/mit-campus.png",
            "/university-lab.jpg",
            "/university-library-interior.png",
        ],
    },
    SeedCollege {
        name: "Harvard University",
        location: "Cambridge, Massachusetts",
        description: "Harvard is the oldest institution of higher learning in the United States, offering unparalleled education and research opportunities.",
        rating: 4.9,
        image: "/harvard-campus.png",
        college_type: "Private University",
        established: 1636,
        affiliations: &["AAU", "COFHE", "Ivy League"],
        courses: &["Law", "Medicine", "Business", "Arts & Sciences", "Engineering"],
        facilities: &["Libraries", "Museums", "Research Centers", "Athletic Facilities", "Student Housing"],
        tuition_fee: 54000.0,
        gallery: &[
            "/harvard-campus.png",
            "/university-library-interior.png",
            "/university-sports-complex.jpg",
        ],
    },
    SeedCollege {
        name: "Oxford University",
        location: "Oxford, United Kingdom",
        description: "The University of Oxford is the oldest university in the English-speaking world with a distinguished history of scholarship.",
        rating: 4.8,
        image: "/oxford-campus.png",
        college_type: "Public University",
        established: 1096,
        affiliations: &["Russell Group", "European University Association"],
        courses: &["Philosophy", "History", "Law", "Medicine", "Sciences"],
        facilities: &["Historic Libraries", "Museums", "Research Labs", "Sports Facilities", "Theaters"],
        tuition_fee: 45000.0,
        gallery: &["/oxford-campus.png", "/university-library-interior.png"],
    },
    SeedCollege {
        name: "Cambridge University",
        location: "Cambridge, United Kingdom",
        description: "University of Cambridge is one of the world's oldest and most prestigious universities, known for academic excellence.",
        rating: 4.9,
        image: "/cambridge-campus.png",
        college_type: "Public University",
        established: 1209,
        affiliations: &["Russell Group", "The Golden Triangle"],
        courses: &["Mathematics", "Natural Sciences", "Engineering", "Medicine", "Law"],
        facilities: &["College Libraries", "Research Labs", "Sports Grounds", "Museums", "Concert Halls"],
        tuition_fee: 46000.0,
        gallery: &[
            "/cambridge-campus.png",
            "/university-library-interior.png",
            "/university-lab.jpg",
        ],
    },
    SeedCollege {
        name: "UC Berkeley",
        location: "Berkeley, California",
        description: "The University of California, Berkeley is a leading public research university with a distinguished faculty and innovative programs.",
        rating: 4.7,
        image: "/berkeley-campus.png",
        college_type: "Public University",
        established: 1868,
        affiliations: &["AAU", "Pac-12", "UC System"],
        courses: &["Computer Science", "Engineering", "Business", "Social Sciences", "Natural Sciences"],
        facilities: &["Research Centers", "Libraries", "Athletic Facilities", "Student Union", "Performance Venues"],
        tuition_fee: 42000.0,
        gallery: &[
            "/berkeley-campus.png",
            "/university-sports-complex.jpg",
            "/university-library-interior.png",
        ],
    },
];

/// Populate demo data once per database.
///
/// The marker insert decides who seeds: `ON CONFLICT DO NOTHING` reports
/// zero affected rows to every process but the first.
pub async fn seed_database(pool: &PgPool) -> Result<(), SeedError> {
    let marker = sqlx::query("INSERT INTO app_metadata (key) VALUES ('seeded') ON CONFLICT (key) DO NOTHING")
        .execute(pool)
        .await?;

    if marker.rows_affected() == 0 {
        tracing::info!("Database already seeded");
        return Ok(());
    }

    tracing::info!("Seeding database...");

    let password_hash = PasswordService::hash_password("password")?;

    let (demo_user_id,): (i32,) = sqlx::query_as(
        "INSERT INTO users (name, email, password_hash, phone, address)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind("Demo User")
    .bind("demo@example.com")
    .bind(&password_hash)
    .bind("+1234567890")
    .bind("123 Demo Street, Demo City")
    .fetch_one(pool)
    .await?;

    let mut first_college_id = None;
    for college in SEED_COLLEGES {
        let (college_id,): (i32,) = sqlx::query_as(
            "INSERT INTO colleges (name, location, description, rating, image, college_type,
                                   established, affiliations, courses, facilities, tuition_fee,
                                   gallery)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id",
        )
        .bind(college.name)
        .bind(college.location)
        .bind(college.description)
        .bind(college.rating)
        .bind(college.image)
        .bind(college.college_type)
        .bind(college.established)
        .bind(to_vec(college.affiliations))
        .bind(to_vec(college.courses))
        .bind(to_vec(college.facilities))
        .bind(college.tuition_fee)
        .bind(to_vec(college.gallery))
        .fetch_one(pool)
        .await?;

        first_college_id.get_or_insert(college_id);
    }

    if let Some(college_id) = first_college_id {
        sqlx::query(
            "INSERT INTO reviews (user_id, college_id, user_name, rating, comment)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(demo_user_id)
        .bind(college_id)
        .bind("Demo User")
        .bind(5i16)
        .bind("Excellent university with world-class facilities and faculty!")
        .execute(pool)
        .await?;
    }

    tracing::info!("Database seeded successfully");
    Ok(())
}

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
