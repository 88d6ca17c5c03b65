#![allow(dead_code)]

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use member_search::db::{DbPool, establish_connection_pool};
use member_search::domain::member::NewMember;
use member_search::domain::team::NewTeam;
use member_search::domain::types::TeamId;
use member_search::repository::{DieselRepository, MemberWriter, TeamWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("build pool");

        let mut conn = pool.get().expect("get connection");
        run_migrations(&mut conn);

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

fn run_migrations(conn: &mut SqliteConnection) {
    conn.run_pending_migrations(MIGRATIONS)
        .expect("run migrations");
}

/// Seeds two teams and five members:
///
/// | id | username | age | team  |
/// |----|----------|-----|-------|
/// | 1  | member1  | 10  | teamA |
/// | 2  | member2  | 20  | teamA |
/// | 3  | member3  | 30  | teamB |
/// | 4  | member4  | 40  | teamB |
/// | 5  | member5  | 50  | -     |
pub fn seed(repo: &DieselRepository) -> (TeamId, TeamId) {
    let team_a = repo
        .create_team(&NewTeam::new("teamA").unwrap())
        .unwrap()
        .id;
    let team_b = repo
        .create_team(&NewTeam::new("teamB").unwrap())
        .unwrap()
        .id;

    let members = vec![
        NewMember::new("member1", 10, Some(team_a)).unwrap(),
        NewMember::new("member2", 20, Some(team_a)).unwrap(),
        NewMember::new("member3", 30, Some(team_b)).unwrap(),
        NewMember::new("member4", 40, Some(team_b)).unwrap(),
        NewMember::new("member5", 50, None).unwrap(),
    ];
    assert_eq!(repo.create_members(&members).unwrap(), 5);

    (team_a, team_b)
}
