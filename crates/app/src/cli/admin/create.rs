use clap::Args;
use ordering_app::{
    database::{self, Db},
    domain::admins::{AdminsService, PgAdminsService, data::NewAdmin, records::AdminUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Admin login name
    #[arg(long)]
    username: String,

    /// Admin password; stored only as an argon2 hash
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(args: CreateAdminArgs) -> Result<(), String> {
    if args.password.len() < 8 {
        return Err("password must be at least 8 characters".to_string());
    }

    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let admin = PgAdminsService::new(Db::new(pool))
        .create_admin(NewAdmin {
            uuid: AdminUuid::new(),
            username: args.username,
            password: args.password,
        })
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("admin_uuid: {}", admin.uuid);
    println!("admin_username: {}", admin.username);

    Ok(())
}
