//! PostgreSQL implementation of MemberRepository.

use crate::domain::foundation::{DomainError, ErrorCode, MemberAccount, Timestamp};
use crate::domain::member::{Coach, Member};
use crate::ports::MemberRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL implementation of the MemberRepository port.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a member.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    account: String,
    name: String,
    password_hash: String,
    sex: String,
    age: i32,
    years_playing: i32,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        Ok(Member {
            account: parse_account(row.account)?,
            name: row.name,
            password_hash: row.password_hash,
            sex: row.sex,
            age: row.age,
            years_playing: row.years_playing,
            email: row.email,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

/// Database row representation of a coach.
#[derive(Debug, sqlx::FromRow)]
struct CoachRow {
    account: String,
    name: String,
    password_hash: String,
    sex: String,
    age: i32,
    years_playing: i32,
    email: String,
    phone: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CoachRow> for Coach {
    type Error = DomainError;

    fn try_from(row: CoachRow) -> Result<Self, Self::Error> {
        Ok(Coach {
            account: parse_account(row.account)?,
            name: row.name,
            password_hash: row.password_hash,
            sex: row.sex,
            age: row.age,
            years_playing: row.years_playing,
            email: row.email,
            phone: row.phone,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_account(account: String) -> Result<MemberAccount, DomainError> {
    MemberAccount::new(account)
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid account: {}", e)))
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save_member(&self, member: &Member) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO members (
                account, name, password_hash, sex, age, years_playing, email, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(member.account.as_str())
        .bind(&member.name)
        .bind(&member.password_hash)
        .bind(&member.sex)
        .bind(member.age)
        .bind(member.years_playing)
        .bind(&member.email)
        .bind(member.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("members_pkey") {
                    return DomainError::new(
                        ErrorCode::AccountTaken,
                        "This account is already used",
                    );
                }
            }
            db_error("Failed to save member", e)
        })?;

        Ok(())
    }

    async fn save_coach(&self, coach: &Coach) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO coaches (
                account, name, password_hash, sex, age, years_playing, email, phone, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(coach.account.as_str())
        .bind(&coach.name)
        .bind(&coach.password_hash)
        .bind(&coach.sex)
        .bind(coach.age)
        .bind(coach.years_playing)
        .bind(&coach.email)
        .bind(&coach.phone)
        .bind(coach.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("coaches_pkey") {
                    return DomainError::new(
                        ErrorCode::AccountTaken,
                        "This account is already used",
                    );
                }
            }
            db_error("Failed to save coach", e)
        })?;

        Ok(())
    }

    async fn find_member_by_account(
        &self,
        account: &MemberAccount,
    ) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> = sqlx::query_as(
            r#"
            SELECT account, name, password_hash, sex, age, years_playing, email, created_at
            FROM members WHERE account = $1
            "#,
        )
        .bind(account.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load member", e))?;

        row.map(Member::try_from).transpose()
    }

    async fn find_coach_by_account(
        &self,
        account: &MemberAccount,
    ) -> Result<Option<Coach>, DomainError> {
        let row: Option<CoachRow> = sqlx::query_as(
            r#"
            SELECT account, name, password_hash, sex, age, years_playing, email, phone, created_at
            FROM coaches WHERE account = $1
            "#,
        )
        .bind(account.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to load coach", e))?;

        row.map(Coach::try_from).transpose()
    }

    async fn account_taken(&self, account: &str) -> Result<bool, DomainError> {
        // Uniqueness spans both stores.
        let (taken,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM members WHERE account = $1)
                OR EXISTS(SELECT 1 FROM coaches WHERE account = $1)
            "#,
        )
        .bind(account)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check account", e))?;

        Ok(taken)
    }
}
