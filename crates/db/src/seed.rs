//! Demo data for local development.

use sqlx::SqlitePool;

/// `(name, email, specialty)`
const FREELANCERS: &[(&str, &str, &str)] = &[
    ("Ada Okafor", "ada@example.com", "Web development"),
    ("Mateo Ruiz", "mateo@example.com", "Brand design"),
    ("Priya Nair", "priya@example.com", "Copywriting"),
];

/// `(name, email, company)`
const CLIENTS: &[(&str, &str, &str)] = &[
    ("Hannah Berg", "hannah@northwind.test", "Northwind Traders"),
    ("Kenji Sato", "kenji@bluepeak.test", "Blue Peak Outfitters"),
];

/// `(title, description, rate, freelancer index, client index)`
const PROJECTS: &[(&str, &str, f64, usize, usize)] = &[
    ("Landing Page", "Single-page marketing site", 500.0, 0, 0),
    ("Logo Refresh", "New logo and colour palette", 350.0, 1, 0),
    ("Product Copy", "Descriptions for the spring catalogue", 40.0, 2, 1),
    ("Storefront", "Online shop with checkout", 1200.0, 0, 1),
];

/// Insert the demo freelancers, clients and projects in one transaction.
///
/// Does nothing when any freelancer already exists. Returns the number of
/// projects inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM freelancers")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Skipping demo seed, freelancers already present");
        return Ok(0);
    }

    let mut freelancer_ids = Vec::with_capacity(FREELANCERS.len());
    for (name, email, specialty) in FREELANCERS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO freelancers (name, email, specialty) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(*name)
        .bind(*email)
        .bind(*specialty)
        .fetch_one(&mut *tx)
        .await?;
        freelancer_ids.push(id);
    }

    let mut client_ids = Vec::with_capacity(CLIENTS.len());
    for (name, email, company) in CLIENTS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO clients (name, email, company) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(*name)
        .bind(*email)
        .bind(*company)
        .fetch_one(&mut *tx)
        .await?;
        client_ids.push(id);
    }

    for (title, description, rate, freelancer, client) in PROJECTS {
        sqlx::query(
            "INSERT INTO projects (title, description, rate, freelancer_id, client_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(*title)
        .bind(*description)
        .bind(*rate)
        .bind(freelancer_ids[*freelancer])
        .bind(client_ids[*client])
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        freelancers = FREELANCERS.len(),
        clients = CLIENTS.len(),
        projects = PROJECTS.len(),
        "Seeded demo data"
    );
    Ok(PROJECTS.len())
}
