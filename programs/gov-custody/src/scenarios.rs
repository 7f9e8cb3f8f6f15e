// =============================================================================
// Settlement scenarios
// =============================================================================
// Drives the state transitions of every instruction through an in-memory
// ledger. Each command runs inside `transact`, which restores the previous
// state when the command fails, the way the runtime rolls back a failed
// transaction. Token balances stand in for the SPL token program.
// =============================================================================

use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::GovCustodyError;
use crate::state::*;
use crate::test_utils::{assert_error, sample_config};

const T0: i64 = 1_700_000_000;

#[derive(Clone)]
struct Ledger {
    now: i64,
    config: Config,
    users: HashMap<Pubkey, User>,
    locked: HashMap<Pubkey, LockedAccount>,
    vests: HashMap<Pubkey, VestAccount>,
    claim_tickets: HashMap<Pubkey, ClaimTicket>,
    redeem_tickets: HashMap<Pubkey, RedeemTicket>,
    reserve: HashMap<(Pubkey, Asset), u64>,
    vaults: HashMap<Asset, u64>,
    gov: HashMap<Pubkey, u64>,
    gov_supply: u64,
}

fn pda(seeds: &[&[u8]]) -> Pubkey {
    Pubkey::find_program_address(seeds, &crate::ID).0
}

fn debit(balance: &mut u64, amount: u64) -> Result<()> {
    *balance = balance
        .checked_sub(amount)
        .ok_or(GovCustodyError::AmountExceedsBalance)?;
    Ok(())
}

impl Ledger {
    fn new() -> Self {
        Self {
            now: T0,
            config: sample_config(),
            users: HashMap::new(),
            locked: HashMap::new(),
            vests: HashMap::new(),
            claim_tickets: HashMap::new(),
            redeem_tickets: HashMap::new(),
            reserve: HashMap::new(),
            vaults: HashMap::new(),
            gov: HashMap::new(),
            gov_supply: 0,
        }
    }

    fn transact<R>(&mut self, command: impl FnOnce(&mut Ledger) -> Result<R>) -> Result<R> {
        let snapshot = self.clone();
        let result = command(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn reserve_of(&self, owner: Pubkey, asset: Asset) -> u64 {
        self.reserve.get(&(owner, asset)).copied().unwrap_or(0)
    }

    fn gov_of(&self, owner: Pubkey) -> u64 {
        self.gov.get(&owner).copied().unwrap_or(0)
    }

    fn vault(&self, asset: Asset) -> u64 {
        self.vaults.get(&asset).copied().unwrap_or(0)
    }

    fn register(&mut self) -> Pubkey {
        let owner = Pubkey::new_unique();
        self.users.insert(
            owner,
            User {
                owner,
                lock_index: 0,
                vest_index: 0,
                redeem_index: 0,
                bump: 255,
            },
        );
        owner
    }

    fn fund(&mut self, owner: Pubkey, asset: Asset, amount: u64) {
        *self.reserve.entry((owner, asset)).or_default() += amount;
    }

    fn deposit(&mut self, owner: Pubkey, asset: Asset, amount: u64, vesting: bool) -> Result<(Pubkey, Pubkey)> {
        self.transact(|ledger| {
            require!(amount > 0, GovCustodyError::ZeroAmount);
            let governance_amount = asset.to_governance_amount(amount)?;
            let now = ledger.now;

            debit(ledger.reserve.entry((owner, asset)).or_default(), amount)?;
            *ledger.vaults.entry(asset).or_default() += amount;

            let user = ledger.users.get_mut(&owner).ok_or(GovCustodyError::NotFound)?;
            let source = if vesting {
                let vest_index = user.take_vest_index()?;
                let address = pda(&[VEST_ACCOUNT_SEED, owner.as_ref(), &vest_index.to_le_bytes()]);
                ledger.vests.insert(
                    address,
                    VestAccount {
                        owner,
                        vest_index,
                        asset,
                        total_amount: governance_amount,
                        start_ts: now,
                        cliff_period: ledger.config.cliff_period,
                        linear_vesting_period: ledger.config.linear_vesting_period,
                        burned_amount: 0,
                        bump: 255,
                    },
                );
                address
            } else {
                let lock_index = user.take_lock_index()?;
                let address = pda(&[LOCKED_ACCOUNT_SEED, owner.as_ref(), &lock_index.to_le_bytes()]);
                ledger.locked.insert(
                    address,
                    LockedAccount {
                        owner,
                        lock_index,
                        asset,
                        total_amount: governance_amount,
                        remaining: governance_amount,
                        bump: 255,
                    },
                );
                address
            };

            let ticket = pda(&[CLAIM_TICKET_SEED, source.as_ref()]);
            ledger.claim_tickets.insert(
                ticket,
                ClaimTicket {
                    owner,
                    source_account: source,
                    asset,
                    amount: governance_amount,
                    claim_delay: ledger.config.claim_delay,
                    created_at: now,
                    bump: 255,
                },
            );

            Ok((source, ticket))
        })
    }

    fn claim(&mut self, signer: Pubkey, ticket: Pubkey) -> Result<()> {
        self.transact(|ledger| {
            let record = ledger
                .claim_tickets
                .remove(&ticket)
                .ok_or(GovCustodyError::NotFound)?;
            require_keys_eq!(record.owner, signer, GovCustodyError::Unauthorized);
            record.ensure_mature(ledger.now)?;

            *ledger.gov.entry(signer).or_default() += record.amount;
            ledger.gov_supply += record.amount;
            Ok(())
        })
    }

    fn open_redeem_ticket(&mut self, owner: Pubkey, source: Pubkey, asset: Asset, amount: u64) -> Result<Pubkey> {
        let user = self.users.get_mut(&owner).ok_or(GovCustodyError::NotFound)?;
        let redeem_index = user.take_redeem_index()?;
        let address = pda(&[REDEEM_TICKET_SEED, owner.as_ref(), &redeem_index.to_le_bytes()]);
        self.redeem_tickets.insert(
            address,
            RedeemTicket {
                owner,
                source_account: source,
                redeem_index,
                asset,
                amount,
                redeem_delay: self.config.redeem_delay,
                created_at: self.now,
                bump: 255,
            },
        );
        Ok(address)
    }

    fn burn_gov(&mut self, owner: Pubkey, amount: u64) -> Result<()> {
        debit(self.gov.entry(owner).or_default(), amount)?;
        self.gov_supply -= amount;
        Ok(())
    }

    fn burn_locked(&mut self, signer: Pubkey, source: Pubkey, amount: u64) -> Result<Pubkey> {
        self.transact(|ledger| {
            let mut locked = ledger
                .locked
                .get(&source)
                .cloned()
                .ok_or(GovCustodyError::NotFound)?;
            require_keys_eq!(locked.owner, signer, GovCustodyError::Unauthorized);

            let redeem_amount = locked.record_burn(amount)?;
            ledger.burn_gov(signer, amount)?;

            if locked.is_drained() {
                ledger.locked.remove(&source);
            } else {
                ledger.locked.insert(source, locked.clone());
            }

            ledger.open_redeem_ticket(signer, source, locked.asset, redeem_amount)
        })
    }

    fn burn_vest(&mut self, signer: Pubkey, source: Pubkey, amount: u64) -> Result<Pubkey> {
        self.transact(|ledger| {
            let mut vest = ledger
                .vests
                .get(&source)
                .cloned()
                .ok_or(GovCustodyError::NotFound)?;
            require_keys_eq!(vest.owner, signer, GovCustodyError::Unauthorized);

            let redeem_amount = vest.record_burn(amount, ledger.now)?;
            ledger.burn_gov(signer, amount)?;
            ledger.vests.insert(source, vest.clone());

            ledger.open_redeem_ticket(signer, source, vest.asset, redeem_amount)
        })
    }

    fn redeem(&mut self, signer: Pubkey, ticket: Pubkey) -> Result<()> {
        self.transact(|ledger| {
            let record = ledger
                .redeem_tickets
                .remove(&ticket)
                .ok_or(GovCustodyError::NotFound)?;
            require_keys_eq!(record.owner, signer, GovCustodyError::Unauthorized);
            record.ensure_mature(ledger.now)?;

            debit(ledger.vaults.entry(record.asset).or_default(), record.amount)?;
            *ledger.reserve.entry((signer, record.asset)).or_default() += record.amount;
            Ok(())
        })
    }
}

#[test]
fn primary_round_trip_partial_burn() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 1_000_000_000);

    let (lock, ticket) = ledger.deposit(alice, Asset::Primary, 200_000_000, false).unwrap();
    assert_eq!(ledger.claim_tickets[&ticket].amount, 200_000_000);
    assert_eq!(ledger.vault(Asset::Primary), 200_000_000);

    ledger.now += ledger.config.claim_delay;
    ledger.claim(alice, ticket).unwrap();
    // 200 display units at 6 decimals
    assert_eq!(ledger.gov_of(alice), 200 * 10u64.pow(GOV_DECIMALS as u32));

    let redeem_ticket = ledger.burn_locked(alice, lock, 100_000_000).unwrap();
    assert_eq!(ledger.locked[&lock].remaining, 100_000_000);
    assert_eq!(ledger.gov_of(alice), 100_000_000);

    let reserve_before = ledger.reserve_of(alice, Asset::Primary);
    ledger.now += ledger.config.redeem_delay;
    ledger.redeem(alice, redeem_ticket).unwrap();

    assert_eq!(ledger.reserve_of(alice, Asset::Primary) - reserve_before, 100_000_000);
    assert_eq!(ledger.vault(Asset::Primary), 100_000_000);
    assert_eq!(ledger.locked[&lock].remaining, 100_000_000);
}

#[test]
fn full_round_trip_restores_balance_and_closes_lock() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 5_000);

    let (lock, ticket) = ledger.deposit(alice, Asset::Primary, 5_000, false).unwrap();
    ledger.now += ledger.config.claim_delay;
    ledger.claim(alice, ticket).unwrap();

    let redeem_ticket = ledger.burn_locked(alice, lock, 5_000).unwrap();
    assert!(!ledger.locked.contains_key(&lock));
    assert_error(ledger.burn_locked(alice, lock, 1), GovCustodyError::NotFound);

    ledger.now += ledger.config.redeem_delay;
    ledger.redeem(alice, redeem_ticket).unwrap();

    assert_eq!(ledger.reserve_of(alice, Asset::Primary), 5_000);
    assert_eq!(ledger.vault(Asset::Primary), 0);
    assert_eq!(ledger.gov_supply, 0);
}

#[test]
fn claim_matures_once_and_only_once() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 10);
    let (_, ticket) = ledger.deposit(alice, Asset::Primary, 10, false).unwrap();

    ledger.now += ledger.config.claim_delay - 1;
    assert_error(ledger.claim(alice, ticket), GovCustodyError::NotMature);
    assert!(ledger.claim_tickets.contains_key(&ticket));

    ledger.now += 1;
    ledger.claim(alice, ticket).unwrap();
    assert_error(ledger.claim(alice, ticket), GovCustodyError::NotFound);
    assert_eq!(ledger.gov_of(alice), 10);
    assert_eq!(ledger.gov_supply, 10);
}

#[test]
fn tickets_only_settle_for_their_owner() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    let mallory = ledger.register();
    ledger.fund(alice, Asset::Primary, 10);
    let (lock, ticket) = ledger.deposit(alice, Asset::Primary, 10, false).unwrap();

    ledger.now += ledger.config.claim_delay;
    assert_error(ledger.claim(mallory, ticket), GovCustodyError::Unauthorized);
    ledger.claim(alice, ticket).unwrap();

    assert_error(ledger.burn_locked(mallory, lock, 10), GovCustodyError::Unauthorized);
    let redeem_ticket = ledger.burn_locked(alice, lock, 10).unwrap();

    ledger.now += ledger.config.redeem_delay;
    assert_error(ledger.redeem(mallory, redeem_ticket), GovCustodyError::Unauthorized);
    ledger.redeem(alice, redeem_ticket).unwrap();
    assert_error(ledger.redeem(alice, redeem_ticket), GovCustodyError::NotFound);
    assert_eq!(ledger.reserve_of(mallory, Asset::Primary), 0);
}

#[test]
fn redeem_waits_for_its_delay() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 10);
    let (lock, ticket) = ledger.deposit(alice, Asset::Primary, 10, false).unwrap();
    ledger.now += ledger.config.claim_delay;
    ledger.claim(alice, ticket).unwrap();

    let redeem_ticket = ledger.burn_locked(alice, lock, 4).unwrap();
    ledger.now += ledger.config.redeem_delay - 1;
    assert_error(ledger.redeem(alice, redeem_ticket), GovCustodyError::NotMature);
    assert_eq!(ledger.vault(Asset::Primary), 10);

    ledger.now += 1;
    ledger.redeem(alice, redeem_ticket).unwrap();
    assert_eq!(ledger.reserve_of(alice, Asset::Primary), 4);
}

#[test]
fn overdraft_fails_without_side_effects() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 100);
    let (lock, ticket) = ledger.deposit(alice, Asset::Primary, 100, false).unwrap();
    ledger.now += ledger.config.claim_delay;
    ledger.claim(alice, ticket).unwrap();

    ledger.burn_locked(alice, lock, 60).unwrap();
    let redeem_index = ledger.users[&alice].redeem_index;

    assert_error(ledger.burn_locked(alice, lock, 41), GovCustodyError::AmountExceedsBalance);
    assert_eq!(ledger.locked[&lock].remaining, 40);
    assert_eq!(ledger.gov_of(alice), 40);
    assert_eq!(ledger.users[&alice].redeem_index, redeem_index);
    assert_eq!(ledger.redeem_tickets.len(), 1);
}

#[test]
fn burns_never_exceed_principal() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 1_000);
    let (lock, ticket) = ledger.deposit(alice, Asset::Primary, 1_000, false).unwrap();
    ledger.now += ledger.config.claim_delay;
    ledger.claim(alice, ticket).unwrap();

    let mut burned = 0;
    for amount in [300, 450, 400, 250, 1, 0] {
        if ledger.burn_locked(alice, lock, amount).is_ok() {
            burned += amount;
        }
        assert!(burned <= 1_000);
    }
    assert_eq!(burned, 1_000);
    assert!(!ledger.locked.contains_key(&lock));
}

#[test]
fn secondary_asset_converts_with_multiplier() {
    let mut ledger = Ledger::new();
    let bob = ledger.register();
    ledger.fund(bob, Asset::Secondary, 3);

    let (lock, ticket) = ledger.deposit(bob, Asset::Secondary, 3, false).unwrap();
    assert_eq!(ledger.claim_tickets[&ticket].amount, 3 * SECONDARY_MULTIPLIER);
    assert_eq!(ledger.vault(Asset::Secondary), 3);
    assert_eq!(ledger.vault(Asset::Primary), 0);

    ledger.now += ledger.config.claim_delay;
    ledger.claim(bob, ticket).unwrap();

    assert_error(
        ledger.burn_locked(bob, lock, SECONDARY_MULTIPLIER + 7),
        GovCustodyError::InvalidAmount,
    );
    assert_eq!(ledger.locked[&lock].remaining, 3 * SECONDARY_MULTIPLIER);

    let first = ledger.burn_locked(bob, lock, 2 * SECONDARY_MULTIPLIER).unwrap();
    assert_eq!(ledger.redeem_tickets[&first].amount, 2);
    assert_eq!(ledger.redeem_tickets[&first].asset, Asset::Secondary);

    let second = ledger.burn_locked(bob, lock, SECONDARY_MULTIPLIER).unwrap();
    assert!(!ledger.locked.contains_key(&lock));

    ledger.now += ledger.config.redeem_delay;
    ledger.redeem(bob, first).unwrap();
    ledger.redeem(bob, second).unwrap();
    assert_eq!(ledger.reserve_of(bob, Asset::Secondary), 3);
    assert_eq!(ledger.vault(Asset::Secondary), 0);
}

#[test]
fn zero_deposit_is_rejected() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 10);

    assert_error(ledger.deposit(alice, Asset::Primary, 0, false), GovCustodyError::ZeroAmount);
    assert_error(ledger.deposit(alice, Asset::Primary, 0, true), GovCustodyError::ZeroAmount);
    assert_eq!(ledger.users[&alice].lock_index, 0);
    assert_eq!(ledger.users[&alice].vest_index, 0);
}

#[test]
fn underfunded_deposit_rolls_back_counters() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 10);

    assert!(ledger.deposit(alice, Asset::Primary, 11, false).is_err());
    assert_eq!(ledger.users[&alice].lock_index, 0);
    assert!(ledger.claim_tickets.is_empty());
    assert_eq!(ledger.reserve_of(alice, Asset::Primary), 10);
}

#[test]
fn vest_unlocks_over_schedule_and_persists() {
    let mut ledger = Ledger::new();
    let carol = ledger.register();
    ledger.fund(carol, Asset::Primary, 1_000);

    let start = ledger.now;
    let (vest, ticket) = ledger.deposit(carol, Asset::Primary, 1_000, true).unwrap();
    ledger.now += ledger.config.claim_delay;
    ledger.claim(carol, ticket).unwrap();

    // claim_delay (60) is still inside the cliff (100)
    assert_error(ledger.burn_vest(carol, vest, 1), GovCustodyError::AmountExceedsBalance);

    ledger.now = start + 100 + 250;
    assert_eq!(ledger.vests[&vest].burnable_amount(ledger.now).unwrap(), 250);
    let first = ledger.burn_vest(carol, vest, 250).unwrap();
    assert_error(ledger.burn_vest(carol, vest, 1), GovCustodyError::AmountExceedsBalance);

    ledger.now = start + 100 + 1_000;
    let second = ledger.burn_vest(carol, vest, 750).unwrap();

    let record = &ledger.vests[&vest];
    assert_eq!(record.burned_amount, record.total_amount);
    assert_eq!(record.burnable_amount(ledger.now).unwrap(), 0);

    ledger.now += ledger.config.redeem_delay;
    ledger.redeem(carol, first).unwrap();
    ledger.redeem(carol, second).unwrap();
    assert_eq!(ledger.reserve_of(carol, Asset::Primary), 1_000);
    assert!(ledger.vests.contains_key(&vest));
}

#[test]
fn param_updates_do_not_touch_outstanding_commitments() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    ledger.fund(alice, Asset::Primary, 100);

    let start = ledger.now;
    let (lock, claim_ticket) = ledger.deposit(alice, Asset::Primary, 50, false).unwrap();
    let (vest, vest_ticket) = ledger.deposit(alice, Asset::Primary, 50, true).unwrap();

    ledger.config.set_params(10_000, 10_000, 10_000, 10_000).unwrap();

    ledger.now = start + 60;
    ledger.claim(alice, claim_ticket).unwrap();
    ledger.claim(alice, vest_ticket).unwrap();

    let redeem_ticket = ledger.burn_locked(alice, lock, 50).unwrap();
    // The new redeem ticket picks up the new delay
    assert_eq!(ledger.redeem_tickets[&redeem_ticket].redeem_delay, 10_000);

    // The vest keeps its original 100 + 1000 schedule
    ledger.now = start + 1_100;
    assert_eq!(ledger.vests[&vest].burnable_amount(ledger.now).unwrap(), 50);
}

#[test]
fn derived_addresses_never_collide() {
    let mut ledger = Ledger::new();
    let alice = ledger.register();
    let bob = ledger.register();
    ledger.fund(alice, Asset::Primary, 100);
    ledger.fund(bob, Asset::Primary, 100);

    let mut addresses = Vec::new();
    for _ in 0..3 {
        let (lock, ticket) = ledger.deposit(alice, Asset::Primary, 10, false).unwrap();
        let (vest, vest_ticket) = ledger.deposit(alice, Asset::Primary, 10, true).unwrap();
        addresses.extend([lock, ticket, vest, vest_ticket]);
    }
    let (bob_lock, bob_ticket) = ledger.deposit(bob, Asset::Primary, 10, false).unwrap();
    addresses.extend([bob_lock, bob_ticket]);

    let mut unique = addresses.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), addresses.len());
    assert_eq!(ledger.users[&alice].lock_index, 3);
    assert_eq!(ledger.users[&alice].vest_index, 3);
    assert_eq!(ledger.users[&bob].lock_index, 1);
}
