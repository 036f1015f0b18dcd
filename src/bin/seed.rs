//! Seed script for development. Populates a fresh database with sample content.
//!
//! Usage: `cargo run --bin seed`
//!
//! Reads the same `DATABASE_URL` / `DB_*` variables as the server (and `.env`).

use chrono::{Duration, Utc};
use heritage_api::config::DatabaseConfig;
use heritage_api::db::connect_options;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let options = connect_options(&DatabaseConfig::from_env())?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== Heritage Seed Script ===");

    seed_media(&pool).await?;
    seed_updates(&pool).await?;
    seed_administration(&pool).await?;

    println!("\n=== Seed complete! ===");
    Ok(())
}

async fn table_is_empty(pool: &PgPool, table: &str) -> anyhow::Result<bool> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] {table} already has {count} rows");
    }
    Ok(count == 0)
}

async fn seed_media(pool: &PgPool) -> anyhow::Result<()> {
    if !table_is_empty(pool, "media_files").await? {
        return Ok(());
    }

    let media = [
        ("FEATURED_VIDEO", "https://cdn.example.org/media/coronation-anniversary.mp4", "Coronation Anniversary", "Highlights from the anniversary ceremony."),
        ("FEATURED_IMAGE", "https://cdn.example.org/media/throne-room.jpg", "The Throne Room", "The restored throne room of the palace."),
        ("FEATURED_IMAGE", "https://cdn.example.org/media/royal-crest.jpg", "The Royal Crest", "The armorial bearings of the House."),
        ("IMAGE", "https://cdn.example.org/media/palace-gardens.jpg", "Palace Gardens", "The gardens in early spring."),
        ("IMAGE", "https://cdn.example.org/media/investiture.jpg", "Investiture", "Recipients of the annual honours."),
        ("IMAGE", "https://cdn.example.org/media/archives.jpg", "The Archives", "Manuscripts held in the royal archives."),
        ("IMAGE", "https://cdn.example.org/media/riverfront.jpg", "Riverfront", "The old city from the river."),
        ("VIDEO", "https://cdn.example.org/media/heritage-walk.mp4", "Heritage Walk", "A guided walk through the old quarter."),
        ("VIDEO", "https://cdn.example.org/media/trust-address.mp4", "Address to the Trust", "Remarks at the annual Trust meeting."),
    ];

    for (kind, url, title, description) in media {
        sqlx::query(
            "INSERT INTO media_files (file_type, file_url, title, description)
             VALUES ($1::media_kind, $2, $3, $4)",
        )
        .bind(kind)
        .bind(url)
        .bind(title)
        .bind(description)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} media files", media.len());
    Ok(())
}

async fn seed_updates(pool: &PgPool) -> anyhow::Result<()> {
    if !table_is_empty(pool, "app_updates").await? {
        return Ok(());
    }

    let now = Utc::now();
    let updates = [
        ("Announcement", "Royal Decree on the Annual Durbar", "The Annual Durbar will be held at the palace on the first Sunday of the winter season. Members of the Household and invited guests are requested to confirm attendance with the Chancellery.", 1, None),
        ("Announcement", "Appointment of the Vice Chamberlain", "The Head of the House is pleased to appoint a new Vice Chamberlain to the Royal Household.", 4, None),
        ("Announcement", "Closure of the Archives for Restoration", "The royal archives will be closed for restoration work for the coming month.", 12, None),
        ("Honours", "New Year Honours List", "The Head of the House has conferred honours upon citizens who have rendered distinguished service to the community, to culture and to the preservation of the heritage of the region.", 3, Some(("/honours", "View honours"))),
        ("Statements", "Statement on Heritage Conservation", "The Royal House affirms its commitment to the conservation of historic monuments and welcomes partnership with civic bodies.", 9, None),
        ("Trust", "Trust Scholarships Announced", "The Royal Trust has announced scholarships for students of history and the fine arts.", 20, Some(("/about", "Learn more"))),
    ];

    for (category, title, content, days_ago, action) in updates {
        let (link, text) = match action {
            Some((link, text)) => (Some(link), Some(text)),
            None => (None, None),
        };
        sqlx::query(
            "INSERT INTO app_updates (category, title, content, published_at, action_link, action_text)
             VALUES ($1::update_category, $2, $3, $4, $5, $6)",
        )
        .bind(category)
        .bind(title)
        .bind(content)
        .bind(now - Duration::days(days_ago))
        .bind(link)
        .bind(text)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} royal updates", updates.len());
    Ok(())
}

async fn seed_administration(pool: &PgPool) -> anyhow::Result<()> {
    if !table_is_empty(pool, "royal_administration").await? {
        return Ok(());
    }

    let members = [
        ("H.E. The Chancellor", "Chancellor of the Royal House", "OFFICER", 1, "Appointed by the Head of the House to oversee the general administration of the Royal Household. The Chancellor serves as the chief administrative officer, ensuring the seamless execution of royal decrees and the maintenance of protocol across all departments."),
        ("H.E. The Vice Chancellor", "Vice Chancellor", "OFFICER", 2, "Assists the Chancellor in all administrative duties and deputizes when required."),
        ("The Marshal", "Marshal of the Royal House", "OFFICER", 3, "Responsible for ceremonial protocol, precedence, and the organization of official royal events."),
        ("The Chamberlain", "Chamberlain", "OFFICER", 4, "Oversees the internal management of the Royal Household and personal affairs of the Head of the House."),
        ("The Vice Chamberlain", "Vice Chamberlain", "OFFICER", 5, "Supports the Chamberlain in managing the household's domestic operations and staff."),
        ("Legal Advisor", "Legal Council", "ADVISOR", 1, "Provides counsel on matters of international and customary law."),
        ("Cultural Advisor", "Heritage Council", "ADVISOR", 2, "Advises on the preservation and promotion of cultural heritage and traditions."),
        ("Strategic Advisor", "Strategy Council", "ADVISOR", 3, "Offers strategic guidance on the Royal House's long-term objectives and external relations."),
        ("Delegate Name", "Delegate for Europe", "DELEGATE", 1, "Representing the Royal House in diplomatic and cultural engagements across Europe."),
        ("Delegate Name", "Delegate for Americas", "DELEGATE", 2, "Fostering relations and representing the interests of the House in the Americas."),
        ("Delegate Name", "Delegate for Asia", "DELEGATE", 3, "Promoting the House's values and maintaining connections within the Asian region."),
    ];

    for (name, role_title, category, display_order, bio) in members {
        sqlx::query(
            "INSERT INTO royal_administration (name, role_title, category, display_order, bio)
             VALUES ($1, $2, $3::admin_category, $4, $5)",
        )
        .bind(name)
        .bind(role_title)
        .bind(category)
        .bind(display_order)
        .bind(bio)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} administration members", members.len());
    Ok(())
}
