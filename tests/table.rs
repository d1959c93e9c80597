//! Table integration tests.

use twentyone::{
    AccountStore, ActionError, RoundOutcome, RoundStatus, RoundStore, StartError, Table,
    TableOptions, settle,
};

fn assert_conserved(table: &Table, id: u64) {
    let round = table.rounds().get(id).expect("round is stored");
    let total = round.deck().len() + round.player().len() + round.dealer().len();
    assert_eq!(total, 52, "cards leaked from round {id}");
}

#[test]
fn start_round_debits_the_bet_and_deals_two_and_two() {
    let table = Table::new(TableOptions::default(), 42);
    let player = table.accounts().open(100);

    let view = table.start_round(player, 10).unwrap();

    assert_eq!(view.status, RoundStatus::Active);
    assert_eq!(view.player_hand.len(), 2);
    assert_eq!(view.dealer_hand.len(), 1);
    assert_eq!(view.dealer_value, None);
    assert_eq!(view.result, None);
    assert_eq!(view.balance, 90);
    assert_eq!(table.accounts().balance(player), Some(90));

    // The stored round holds both dealer cards and the remaining deck.
    let round = table.rounds().get(view.round_id).unwrap();
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.deck().len(), 48);
    assert_conserved(&table, view.round_id);

    // A fresh projection matches the one returned by the action.
    assert_eq!(table.round_view(view.round_id).unwrap(), view);
}

#[test]
fn start_round_rejects_an_uncovered_bet_without_debiting() {
    let table = Table::new(TableOptions::default(), 42);
    let player = table.accounts().open(100);

    assert_eq!(
        table.start_round(player, 200).unwrap_err(),
        StartError::InsufficientFunds
    );
    assert_eq!(table.accounts().balance(player), Some(100));
}

#[test]
fn start_round_enforces_bet_limits() {
    let options = TableOptions::default().with_min_bet(5).with_max_bet(50);
    let table = Table::new(options, 42);
    let player = table.accounts().open(100);

    assert_eq!(table.start_round(player, 0).unwrap_err(), StartError::ZeroBet);
    assert_eq!(
        table.start_round(player, 4).unwrap_err(),
        StartError::BetOutOfRange
    );
    assert_eq!(
        table.start_round(player, 51).unwrap_err(),
        StartError::BetOutOfRange
    );
    assert_eq!(table.accounts().balance(player), Some(100));
}

#[test]
fn start_round_rejects_unknown_accounts() {
    let table = Table::new(TableOptions::default(), 42);

    assert_eq!(
        table.start_round(404, 10).unwrap_err(),
        StartError::UnknownAccount
    );
}

#[test]
fn actions_on_unknown_rounds_fail() {
    let table = Table::new(TableOptions::default(), 42);
    let player = table.accounts().open(100);

    assert_eq!(
        table.hit(999, player).unwrap_err(),
        ActionError::RoundNotFound
    );
    assert_eq!(
        table.stand(999, player).unwrap_err(),
        ActionError::RoundNotFound
    );
    assert_eq!(
        table.round_view(999).unwrap_err(),
        ActionError::RoundNotFound
    );
}

#[test]
fn rounds_are_private_to_their_owner() {
    let table = Table::new(TableOptions::default(), 42);
    let owner = table.accounts().open(100);
    let intruder = table.accounts().open(100);

    let view = table.start_round(owner, 10).unwrap();

    assert_eq!(
        table.hit(view.round_id, intruder).unwrap_err(),
        ActionError::RoundNotOwned
    );
    assert_eq!(
        table.stand(view.round_id, intruder).unwrap_err(),
        ActionError::RoundNotOwned
    );
    assert_eq!(table.accounts().balance(intruder), Some(100));

    // The owner can still finish the round.
    assert!(table.stand(view.round_id, owner).is_ok());
}

#[test]
fn full_round_conserves_cards_and_respects_the_dealer_policy() {
    let table = Table::new(TableOptions::default(), 7);
    let player = table.accounts().open(1000);

    let mut view = table.start_round(player, 10).unwrap();
    let id = view.round_id;
    assert_conserved(&table, id);

    // Hit to at least 17, the way the dealer would.
    while view.status == RoundStatus::Active && view.player_value < 17 {
        view = table.hit(id, player).unwrap();
        assert_conserved(&table, id);
    }
    if view.status == RoundStatus::Active {
        view = table.stand(id, player).unwrap();
        assert_conserved(&table, id);
    }

    assert_eq!(view.status, RoundStatus::Finished);
    let result = view.result.expect("finished rounds carry a result");
    let dealer_value = view.dealer_value.expect("finished rounds reveal the dealer");

    if view.player_value > 21 {
        // Bust loses before the dealer ever plays.
        assert_eq!(result, RoundOutcome::Lose);
    } else {
        // The dealer drew to 17 or beyond (a bust is also past 17).
        assert!(dealer_value >= 17);
        let (expected, _) = settle(view.player_value, dealer_value, 10);
        assert_eq!(result, expected);
    }

    let expected_balance = match result {
        RoundOutcome::Win => 1010,
        RoundOutcome::Push => 1000,
        RoundOutcome::Lose => 990,
    };
    assert_eq!(view.balance, expected_balance);
    assert_eq!(table.accounts().balance(player), Some(expected_balance));
}

#[test]
fn abandoned_rounds_persist_and_new_ones_get_fresh_ids() {
    let table = Table::new(TableOptions::default(), 42);
    let player = table.accounts().open(100);

    let first = table.start_round(player, 10).unwrap();
    let second = table.start_round(player, 10).unwrap();

    assert_ne!(first.round_id, second.round_id);
    assert_eq!(table.accounts().balance(player), Some(80));

    // The abandoned first round is still there and still playable.
    let view = table.round_view(first.round_id).unwrap();
    assert_eq!(view.status, RoundStatus::Active);
    assert!(table.stand(first.round_id, player).is_ok());
}

#[test]
fn settled_balances_accumulate_over_many_rounds() {
    let table = Table::new(TableOptions::default(), 3);
    let player = table.accounts().open(1000);
    let mut expected = 1000;

    for _ in 0..20 {
        let view = table.start_round(player, 10).unwrap();
        let done = table.stand(view.round_id, player).unwrap();

        expected -= 10;
        expected += match done.result.expect("stand settles the round") {
            RoundOutcome::Win => 20,
            RoundOutcome::Push => 10,
            RoundOutcome::Lose => 0,
        };
        assert_eq!(done.balance, expected);
    }

    assert_eq!(table.accounts().balance(player), Some(expected));
}

#[test]
fn active_projection_omits_the_dealer_secrets() {
    let table = Table::new(TableOptions::default(), 42);
    let player = table.accounts().open(100);

    let view = table.start_round(player, 10).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["status"], "active");
    assert_eq!(json["dealer_hand"].as_array().unwrap().len(), 1);
    assert!(json.get("dealer_value").is_none());
    assert!(json.get("result").is_none());

    let done = table.stand(view.round_id, player).unwrap();
    let json = serde_json::to_value(&done).unwrap();

    assert_eq!(json["status"], "finished");
    assert!(json["dealer_hand"].as_array().unwrap().len() >= 2);
    assert!(json.get("dealer_value").is_some());
    let result = json["result"].as_str().unwrap();
    assert!(matches!(result, "win" | "lose" | "push"));
}

#[test]
fn stored_rounds_survive_a_serde_round_trip() {
    let table = Table::new(TableOptions::default(), 42);
    let player = table.accounts().open(100);

    let view = table.start_round(player, 10).unwrap();
    let round = table.rounds().get(view.round_id).unwrap();

    let encoded = serde_json::to_string(&round).unwrap();
    let decoded: twentyone::Round = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, round);
}
