#![cfg(test)]
extern crate std;

use gov_token::{GovToken, GovTokenClient};
use shared::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, TOKEN_UNIT};
use shared::ContractError;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events},
    vec, Address, Env, IntoVal, String, Val, Vec,
};

use crate::{Dao, DaoClient};

const PROPOSAL_TITLE: &str = "Chicken or Egg";
const PROPOSAL_DESCRIPTION: &str = "What came first?";

// ── Test Helpers ─────────────────────────────────────────────────────────────

struct Deployment {
    env: Env,
    token: GovTokenClient<'static>,
    dao: DaoClient<'static>,
    owner: Address,
    other_account: Address,
}

fn deployment() -> Deployment {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let other_account = Address::generate(&env);

    let token_id = env.register(GovToken, ());
    let token = GovTokenClient::new(&env, &token_id);
    token.initialize(
        &owner,
        &String::from_str(&env, "MyToken"),
        &String::from_str(&env, "MT"),
        &100_000,
    );

    let dao_id = env.register(Dao, ());
    let dao = DaoClient::new(&env, &dao_id);
    dao.initialize(&owner, &token_id);

    Deployment {
        env,
        token,
        dao,
        owner,
        other_account,
    }
}

fn deploy_token(env: &Env, admin: &Address) -> GovTokenClient<'static> {
    let token_id = env.register(GovToken, ());
    let token = GovTokenClient::new(env, &token_id);
    token.initialize(
        admin,
        &String::from_str(env, "NextToken"),
        &String::from_str(env, "NT"),
        &1,
    );
    token
}

/// The last `n` events, oldest first.
fn last_events(env: &Env, n: u32) -> Vec<(Address, Vec<Val>, Val)> {
    let events = env.events().all();
    events.slice(events.len() - n..)
}

fn text(env: &Env, s: &str) -> String {
    String::from_str(env, s)
}

fn create_sample_proposal(d: &Deployment, creator: &Address) -> u32 {
    d.dao.create_proposal(
        creator,
        &text(&d.env, PROPOSAL_TITLE),
        &text(&d.env, PROPOSAL_DESCRIPTION),
    )
}

// ── Initialization Tests ──────────────────────────────────────────────────────

#[test]
fn test_initialize() {
    let d = deployment();

    assert_eq!(d.dao.admin(), d.owner);
    assert_eq!(d.dao.token(), d.token.address);
    assert_eq!(d.dao.proposal_count(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let d = deployment();

    assert_eq!(
        d.dao.try_initialize(&d.owner, &d.token.address),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

// ── Proposal Tests ────────────────────────────────────────────────────────────

#[test]
fn test_create_proposal() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);

    let index = create_sample_proposal(&d, &d.other_account);
    assert_eq!(index, 0);

    let proposal = d.dao.proposal(&0);
    assert_eq!(proposal.creator, d.other_account);
    assert_eq!(proposal.title, text(&d.env, PROPOSAL_TITLE));
    assert_eq!(proposal.description, text(&d.env, PROPOSAL_DESCRIPTION));
    assert_eq!(proposal.yes, 0);
    assert_eq!(proposal.no, 0);
    assert_eq!(d.dao.proposal_count(), 1);
}

#[test]
fn test_proposal_indices_are_sequential() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);
    d.token.buy(&d.owner, &2);

    assert_eq!(create_sample_proposal(&d, &d.other_account), 0);
    assert_eq!(create_sample_proposal(&d, &d.owner), 1);
    assert_eq!(create_sample_proposal(&d, &d.other_account), 2);

    assert_eq!(d.dao.proposal_count(), 3);
    assert_eq!(d.dao.proposal(&1).creator, d.owner);
}

#[test]
fn test_create_proposal_requires_whole_token() {
    let d = deployment();

    assert_eq!(
        d.dao.try_create_proposal(
            &d.other_account,
            &text(&d.env, PROPOSAL_TITLE),
            &text(&d.env, PROPOSAL_DESCRIPTION),
        ),
        Err(Ok(ContractError::NotEligible))
    );

    // A fraction of a token is still not enough.
    d.token.buy(&d.owner, &1);
    d.token.transfer(&d.owner, &d.other_account, &(TOKEN_UNIT - 1));
    assert_eq!(
        d.dao.try_create_proposal(
            &d.other_account,
            &text(&d.env, PROPOSAL_TITLE),
            &text(&d.env, PROPOSAL_DESCRIPTION),
        ),
        Err(Ok(ContractError::NotEligible))
    );
    assert_eq!(d.dao.proposal_count(), 0);
}

#[test]
fn test_create_proposal_validates_text() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);

    assert_eq!(
        d.dao.try_create_proposal(
            &d.other_account,
            &text(&d.env, ""),
            &text(&d.env, PROPOSAL_DESCRIPTION),
        ),
        Err(Ok(ContractError::EmptyTitle))
    );

    let long_title = String::from_bytes(&d.env, &[b'a'; 129]);
    assert_eq!(
        d.dao.try_create_proposal(
            &d.other_account,
            &long_title,
            &text(&d.env, PROPOSAL_DESCRIPTION),
        ),
        Err(Ok(ContractError::TextTooLong))
    );

    let long_description = String::from_bytes(&d.env, &[b'b'; 1025]);
    assert_eq!(
        d.dao.try_create_proposal(
            &d.other_account,
            &text(&d.env, PROPOSAL_TITLE),
            &long_description,
        ),
        Err(Ok(ContractError::TextTooLong))
    );
    assert_eq!(d.dao.proposal_count(), 0);

    // Empty descriptions are fine.
    assert_eq!(
        d.dao.create_proposal(&d.other_account, &text(&d.env, PROPOSAL_TITLE), &text(&d.env, "")),
        0
    );
}

#[test]
fn test_create_proposal_accepts_text_at_limits() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);

    let title = String::from_bytes(&d.env, &[b'a'; MAX_TITLE_LEN as usize]);
    let description = String::from_bytes(&d.env, &[b'b'; MAX_DESCRIPTION_LEN as usize]);

    let index = d.dao.create_proposal(&d.other_account, &title, &description);

    let proposal = d.dao.proposal(&index);
    assert_eq!(proposal.title.len(), 128);
    assert_eq!(proposal.description.len(), 1024);
}

#[test]
fn test_unknown_proposal() {
    let d = deployment();

    assert_eq!(d.dao.try_proposal(&0), Err(Ok(ContractError::ProposalNotFound)));
}

#[test]
fn test_create_proposal_publishes_event() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);

    create_sample_proposal(&d, &d.other_account);

    assert_eq!(
        last_events(&d.env, 1),
        vec![
            &d.env,
            (
                d.dao.address.clone(),
                (symbol_short!("proposal"), d.other_account.clone()).into_val(&d.env),
                0_u32.into_val(&d.env),
            ),
        ]
    );
}

// ── Voting Tests ──────────────────────────────────────────────────────────────

#[test]
fn test_vote_yes() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);
    create_sample_proposal(&d, &d.other_account);

    d.dao.vote(&d.other_account, &0, &true);

    assert_eq!(
        last_events(&d.env, 1),
        vec![
            &d.env,
            (
                d.dao.address.clone(),
                (symbol_short!("vote"), d.other_account.clone()).into_val(&d.env),
                (0_u32, true).into_val(&d.env),
            ),
        ]
    );

    let proposal = d.dao.proposal(&0);
    assert_eq!(proposal.creator, d.other_account);
    assert_eq!(proposal.title, text(&d.env, PROPOSAL_TITLE));
    assert_eq!(proposal.description, text(&d.env, PROPOSAL_DESCRIPTION));
    assert_eq!(proposal.yes, 1);
    assert_eq!(proposal.no, 0);
    assert!(d.dao.has_voted(&0, &d.other_account));
    assert_eq!(d.dao.get_vote(&0, &d.other_account), Some(true));
}

#[test]
fn test_vote_no_and_tally() {
    let d = deployment();
    let voter = Address::generate(&d.env);
    d.token.buy(&d.other_account, &1);
    d.token.buy(&d.owner, &1);
    d.token.buy(&voter, &1);
    create_sample_proposal(&d, &d.other_account);

    d.dao.vote(&d.other_account, &0, &true);
    d.dao.vote(&d.owner, &0, &false);
    d.dao.vote(&voter, &0, &false);

    let proposal = d.dao.proposal(&0);
    assert_eq!(proposal.yes, 1);
    assert_eq!(proposal.no, 2);
    assert_eq!(d.dao.get_vote(&0, &d.owner), Some(false));
}

#[test]
fn test_votes_are_not_weighted_by_balance() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);
    d.token.buy(&d.owner, &50);
    create_sample_proposal(&d, &d.other_account);

    d.dao.vote(&d.owner, &0, &true);

    assert_eq!(d.dao.proposal(&0).yes, 1);
}

#[test]
fn test_double_vote_rejected() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);
    create_sample_proposal(&d, &d.other_account);

    d.dao.vote(&d.other_account, &0, &true);

    assert_eq!(
        d.dao.try_vote(&d.other_account, &0, &false),
        Err(Ok(ContractError::AlreadyVoted))
    );
    let proposal = d.dao.proposal(&0);
    assert_eq!(proposal.yes, 1);
    assert_eq!(proposal.no, 0);
}

#[test]
fn test_vote_is_per_proposal() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);
    create_sample_proposal(&d, &d.other_account);
    create_sample_proposal(&d, &d.other_account);

    d.dao.vote(&d.other_account, &0, &true);
    d.dao.vote(&d.other_account, &1, &false);

    assert_eq!(d.dao.proposal(&0).yes, 1);
    assert_eq!(d.dao.proposal(&1).no, 1);
    assert!(!d.dao.has_voted(&0, &d.owner));
    assert_eq!(d.dao.get_vote(&1, &d.owner), None);
}

#[test]
fn test_vote_unknown_proposal() {
    let d = deployment();
    d.token.buy(&d.other_account, &1);

    assert_eq!(
        d.dao.try_vote(&d.other_account, &7, &true),
        Err(Ok(ContractError::ProposalNotFound))
    );
}

#[test]
fn test_vote_requires_whole_token() {
    let d = deployment();
    let outsider = Address::generate(&d.env);
    d.token.buy(&d.other_account, &1);
    create_sample_proposal(&d, &d.other_account);

    assert_eq!(
        d.dao.try_vote(&outsider, &0, &true),
        Err(Ok(ContractError::NotEligible))
    );
    assert!(!d.dao.has_voted(&0, &outsider));
}

#[test]
fn test_moved_token_votes_again_from_new_address() {
    let d = deployment();
    let second = Address::generate(&d.env);
    d.token.buy(&d.other_account, &1);
    create_sample_proposal(&d, &d.other_account);

    d.dao.vote(&d.other_account, &0, &true);
    d.token.transfer(&d.other_account, &second, &TOKEN_UNIT);

    // Eligibility follows the current balance; votes are per address.
    assert_eq!(
        d.dao.try_vote(&d.other_account, &0, &true),
        Err(Ok(ContractError::NotEligible))
    );
    d.dao.vote(&second, &0, &true);
    assert_eq!(d.dao.proposal(&0).yes, 2);
}

// ── Administration Tests ──────────────────────────────────────────────────────

#[test]
fn test_set_admin_requires_admin_auth() {
    let d = deployment();
    let new_admin = Address::generate(&d.env);

    d.dao.set_admin(&new_admin);

    assert_eq!(
        d.env.auths(),
        std::vec![(
            d.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    d.dao.address.clone(),
                    symbol_short!("set_admin"),
                    (&new_admin,).into_val(&d.env),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
    assert_eq!(d.dao.admin(), new_admin);
}

#[test]
fn test_set_token_switches_eligibility() {
    let d = deployment();
    let next_token = deploy_token(&d.env, &d.owner);
    let newcomer = Address::generate(&d.env);
    d.token.buy(&d.other_account, &1);
    next_token.buy(&newcomer, &1);

    d.dao.set_token(&next_token.address);

    assert_eq!(
        d.env.auths(),
        std::vec![(
            d.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    d.dao.address.clone(),
                    symbol_short!("set_token"),
                    (&next_token.address,).into_val(&d.env),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
    assert_eq!(d.dao.token(), next_token.address);

    assert_eq!(create_sample_proposal(&d, &newcomer), 0);
    assert_eq!(
        d.dao.try_create_proposal(
            &d.other_account,
            &text(&d.env, PROPOSAL_TITLE),
            &text(&d.env, PROPOSAL_DESCRIPTION),
        ),
        Err(Ok(ContractError::NotEligible))
    );
}
