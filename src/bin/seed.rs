//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env). Each section is idempotent and
//! skipped when data already exists.

use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

const ADMIN_EMAIL: &str = "admin@dashboard.com";
const ADMIN_PASSWORD: &str = "admin123";

const CLIENT_NAMES: &[&str] = &[
    "Acme Corporation",
    "Globex Industries",
    "Initech Solutions",
    "Hooli Tech",
    "Pied Piper",
    "Umbrella Corp",
    "Stark Industries",
    "Wayne Enterprises",
    "Oscorp Technologies",
    "Cyberdyne Systems",
    "Aperture Science",
    "Massive Dynamic",
    "Soylent Corp",
    "Tyrell Corporation",
    "Weyland-Yutani",
    "InGen Labs",
    "LexCorp",
    "Gekko & Co",
    "Prestige Worldwide",
    "Dunder Mifflin",
];

const PROJECT_PREFIXES: &[&str] = &[
    "E-commerce Platform",
    "Mobile Banking App",
    "CRM Dashboard",
    "Analytics Suite",
    "Inventory Management",
    "Customer Portal",
    "AI Chatbot",
    "Cloud Migration",
    "DevOps Pipeline",
    "Marketing Automation",
    "HR System",
    "Supply Chain App",
    "Payment Gateway",
    "Social Media Tool",
    "Document Management",
    "API Gateway",
    "Data Warehouse",
    "IoT Dashboard",
    "Security Audit",
    "Performance Optimization",
];

const PROJECT_TYPES: &[&str] = &["Web", "Mobile", "AI", "DevOps", "Consulting", "Other"];
const PRICING_PACKAGES: &[&str] = &["Basic", "Professional", "Enterprise", "Custom"];

/// Status distribution weights (40% completed, 30% active, 20% pending,
/// 10% cancelled).
const STATUS_WEIGHTS: &[(&str, u32)] = &[
    ("completed", 40),
    ("active", 30),
    ("pending", 20),
    ("cancelled", 10),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== OpsDesk Seed Script ===");

    seed_primary_admin(&pool).await?;
    let client_ids = seed_clients(&pool).await?;
    seed_projects(&pool, &client_ids).await?;
    seed_team_members(&pool).await?;
    seed_activity_logs(&pool).await?;

    println!("\n=== Seed complete! ===");
    println!("Admin login: {ADMIN_EMAIL} / {ADMIN_PASSWORD}");

    Ok(())
}

async fn seed_primary_admin(pool: &PgPool) -> anyhow::Result<()> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
            .bind(ADMIN_EMAIL)
            .fetch_one(pool)
            .await?;

    let hash = opsdesk::services::auth::hash_password(ADMIN_PASSWORD)?;

    if exists {
        sqlx::query("UPDATE admins SET password_hash = $1 WHERE email = $2")
            .bind(&hash)
            .bind(ADMIN_EMAIL)
            .execute(pool)
            .await?;
        println!("[done] Updated primary admin password");
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO admins (name, email, password_hash, is_primary, allow_registration)
         VALUES ('Admin', $1, $2, true, false)",
    )
    .bind(ADMIN_EMAIL)
    .bind(&hash)
    .execute(pool)
    .await?;

    println!("[done] Created primary admin");
    Ok(())
}

async fn seed_clients(pool: &PgPool) -> anyhow::Result<Vec<Uuid>> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Clients already exist ({count})");
        let ids = sqlx::query_scalar("SELECT id FROM clients ORDER BY created_at")
            .fetch_all(pool)
            .await?;
        return Ok(ids);
    }

    let mut rng = rand::rng();
    let mut ids = Vec::with_capacity(CLIENT_NAMES.len());

    for name in CLIENT_NAMES {
        let status = if rng.random_range(0..10) == 0 {
            "inactive"
        } else {
            "active"
        };
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO clients (name, email, avatar, status)
             VALUES ($1, $2, $3, $4::client_status) RETURNING id",
        )
        .bind(name)
        .bind(client_email(name))
        .bind(dicebear_url(name))
        .bind(status)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }

    println!("[done] Created {} clients", ids.len());
    Ok(ids)
}

async fn seed_projects(pool: &PgPool, client_ids: &[Uuid]) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Projects already exist ({count})");
        return Ok(());
    }

    let mut rng = rand::rng();
    let mut created = 0usize;

    // Retention simulation: the first 6 clients get 3-4 projects, the next 8
    // get 1-2, the rest get one each; top up to 55 with random clients.
    for (i, client_id) in client_ids.iter().enumerate() {
        let num_projects = if i < 6 {
            rng.random_range(3..=4)
        } else if i < 14 {
            rng.random_range(1..=2)
        } else {
            1
        };
        for j in 0..num_projects {
            let name = if i < 6 {
                format!(
                    "{} v{}",
                    PROJECT_PREFIXES[created % PROJECT_PREFIXES.len()],
                    j + 1
                )
            } else {
                PROJECT_PREFIXES[created % PROJECT_PREFIXES.len()].to_string()
            };
            insert_project(pool, &mut rng, *client_id, &name).await?;
            created += 1;
        }
    }

    while created < 55 {
        let client_id = client_ids[rng.random_range(0..client_ids.len())];
        let name = format!(
            "{} - Phase {}",
            PROJECT_PREFIXES[rng.random_range(0..PROJECT_PREFIXES.len())],
            rng.random_range(1..=5)
        );
        insert_project(pool, &mut rng, client_id, &name).await?;
        created += 1;
    }

    println!("[done] Created {created} projects");
    Ok(())
}

async fn insert_project(
    pool: &PgPool,
    rng: &mut impl Rng,
    client_id: Uuid,
    name: &str,
) -> anyhow::Result<()> {
    let project_type = PROJECT_TYPES[rng.random_range(0..PROJECT_TYPES.len())];
    let package = PRICING_PACKAGES[rng.random_range(0..PRICING_PACKAGES.len())];
    let status = weighted_status(rng.random_range(0..100));
    let value = pricing_value(package, rng);
    let days_ago: i32 = rng.random_range(1..=365);

    sqlx::query(
        "INSERT INTO projects (name, client_id, project_type, pricing_package, value,
             status, description, start_date)
         VALUES ($1, $2, $3::project_type, $4::pricing_package, $5,
             $6::project_status, $7, NOW() - make_interval(days => $8))",
    )
    .bind(name)
    .bind(client_id)
    .bind(project_type)
    .bind(package)
    .bind(value)
    .bind(status)
    .bind(format!("{project_type} project"))
    .bind(days_ago)
    .execute(pool)
    .await?;

    Ok(())
}

async fn seed_team_members(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM team_members")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Team members already exist ({count})");
        return Ok(());
    }

    let members: &[(&str, &str, &str, bool, &[&str])] = &[
        ("Tom Holland", "Frontend Lead", "tom@dashboard.com", true, &["Vue", "Design"]),
        ("Sajeena Malla", "Backend Dev", "sajeena@dashboard.com", false, &["Node", "SQL"]),
        ("Chris Hemsworth", "Product Designer", "hemsworth@dashboard.com", true, &["Figma", "UX"]),
        ("Nishant Malla", "DevOps Engineer", "nishant@dashboard.com", false, &["AWS", "CI/CD"]),
        ("Ryan Gosling", "Intern", "ryan@dashboard.com", true, &["Learning"]),
    ];

    for (name, role, email, online, tags) in members {
        let tags_json = serde_json::to_value(tags)?;
        sqlx::query(
            "INSERT INTO team_members (name, role, email, online, tags, avatar_url)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(name)
        .bind(role)
        .bind(email)
        .bind(online)
        .bind(&tags_json)
        .bind(dicebear_url(name))
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} team members", members.len());
    Ok(())
}

async fn seed_activity_logs(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activity_logs")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Activity logs already exist ({count})");
        return Ok(());
    }

    let entries = [
        ("Database seeded with sample data", "success"),
        ("Created client records", "info"),
        ("Created project records", "info"),
        ("System ready", "success"),
    ];

    for (text, kind) in entries {
        sqlx::query("INSERT INTO activity_logs (text, type) VALUES ($1, $2::feed_type)")
            .bind(text)
            .bind(kind)
            .execute(pool)
            .await?;
    }

    println!("[done] Created {} activity log entries", entries.len());
    Ok(())
}

/// Pick a status from the weighted distribution given a roll in 0..100.
fn weighted_status(roll: u32) -> &'static str {
    let mut remaining = roll;
    for (status, weight) in STATUS_WEIGHTS {
        if remaining < *weight {
            return status;
        }
        remaining -= weight;
    }
    "pending"
}

/// Package price: fixed for Basic/Professional, ranged for the rest.
fn pricing_value(package: &str, rng: &mut impl Rng) -> i64 {
    match package {
        "Basic" => 2999,
        "Professional" => 9999,
        "Enterprise" => rng.random_range(15_000..=50_000),
        "Custom" => rng.random_range(5_000..=100_000),
        _ => 0,
    }
}

/// "Acme Corporation" -> "contact@acme-corporation.com"
fn client_email(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    let slug = slug
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("contact@{slug}.com")
}

fn dicebear_url(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        name.replace(' ', "%20")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_status_covers_distribution() {
        assert_eq!(weighted_status(0), "completed");
        assert_eq!(weighted_status(39), "completed");
        assert_eq!(weighted_status(40), "active");
        assert_eq!(weighted_status(69), "active");
        assert_eq!(weighted_status(70), "pending");
        assert_eq!(weighted_status(89), "pending");
        assert_eq!(weighted_status(90), "cancelled");
        assert_eq!(weighted_status(99), "cancelled");
    }

    #[test]
    fn fixed_package_prices() {
        let mut rng = rand::rng();
        assert_eq!(pricing_value("Basic", &mut rng), 2999);
        assert_eq!(pricing_value("Professional", &mut rng), 9999);
        let enterprise = pricing_value("Enterprise", &mut rng);
        assert!((15_000..=50_000).contains(&enterprise));
    }

    #[test]
    fn client_email_slugging() {
        assert_eq!(client_email("Acme Corporation"), "contact@acme-corporation.com");
        assert_eq!(client_email("Gekko & Co"), "contact@gekko-co.com");
    }
}
