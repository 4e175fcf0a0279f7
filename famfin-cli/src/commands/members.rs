use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use shared::models::{InviteMemberRequest, Member, Role};

use super::context::CliContext;

#[derive(Subcommand, Debug)]
pub enum MembersCommand {
    /// List everyone sharing the family budget
    List,
    /// Invite someone to the family budget
    Invite(InviteArgs),
    /// Remove a member by id
    Remove {
        /// Membership id as shown by `famfin members list`
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct InviteArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Relation to the owner, e.g. Spouse or Child
    #[arg(long)]
    pub relation: String,

    /// MEMBER or ADMIN
    #[arg(long, default_value = "MEMBER", value_parser = parse_role)]
    pub role: Role,

    /// Monthly spending allowance
    #[arg(long, default_value_t = 0.0)]
    pub limit: f64,
}

fn parse_role(value: &str) -> Result<Role, String> {
    value.parse().map_err(|err: &str| err.to_string())
}

pub async fn run(ctx: &CliContext, command: MembersCommand) -> Result<()> {
    match command {
        MembersCommand::List => {
            let members = ctx.api.list_members().await.context("failed to list members")?;
            if members.is_empty() {
                println!("No members yet.");
            }
            for member in &members {
                println!("{}", member_row(member));
            }
            Ok(())
        }
        MembersCommand::Invite(args) => {
            let request = InviteMemberRequest {
                name: args.name,
                email: args.email,
                role: args.role,
                relation: args.relation,
                monthly_limit: args.limit,
            };
            if let Err(reason) = request.validate() {
                bail!("invalid invitation: {reason}");
            }
            ctx.api
                .invite_member(&request)
                .await
                .context("failed to invite member")?;
            println!("Invitation sent to {}.", request.email);
            Ok(())
        }
        MembersCommand::Remove { id } => {
            ctx.api
                .remove_member(&id)
                .await
                .with_context(|| format!("failed to remove member {id}"))?;
            println!("Removed member {id}.");
            Ok(())
        }
    }
}

fn member_row(member: &Member) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{:.2}",
        member.id, member.name, member.email, member.relation, member.role, member.monthly_limit
    )
}
