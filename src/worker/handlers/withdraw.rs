use crate::{
    common::{money::Money, outcome::Outcome},
    domain::{account::AccountId, ledger::Ledger},
};

pub fn handle(ledger: &mut Ledger, account: AccountId, amount: Money) -> Outcome {
    match ledger.withdraw(account, amount) {
        Ok(()) => Outcome::success("Withdrawal successful!"),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::outcome::Tone;

    fn money(v: i64) -> Money {
        Money::from_units(v)
    }

    // Helper to open an account holding `balance`
    fn seed(ledger: &mut Ledger, balance: Money) -> AccountId {
        ledger.create_account("Alice", balance).unwrap()
    }

    #[test]
    fn withdraw_debits_when_sufficient_funds() {
        let mut ledger = Ledger::default();
        let id = seed(&mut ledger, money(100));

        let out = handle(&mut ledger, id, money(40));

        assert_eq!(out, Outcome::success("Withdrawal successful!"));
        assert_eq!(ledger.find_account(id).unwrap().balance(), money(60));
    }

    #[test]
    fn withdraw_reports_insufficient_balance_separately() {
        let mut ledger = Ledger::default();
        let id = seed(&mut ledger, money(30));

        let out = handle(&mut ledger, id, money(50));

        assert_eq!(out.tone, Tone::Failure);
        assert_eq!(out.message, "Insufficient balance!");
        assert_eq!(
            ledger.find_account(id).unwrap().balance(),
            money(30),
            "balance must not go negative"
        );
    }

    #[test]
    fn withdraw_from_unknown_account_reports_not_found() {
        let mut ledger = Ledger::default();
        seed(&mut ledger, money(30));

        let out = handle(&mut ledger, 2, money(1));

        assert_eq!(out, Outcome::failure("Account not found!"));
    }

    #[test]
    fn withdraw_entire_balance_leaves_zero() {
        let mut ledger = Ledger::default();
        let id = seed(&mut ledger, money(150));

        assert!(handle(&mut ledger, id, money(150)).is_success());
        assert_eq!(ledger.find_account(id).unwrap().balance(), Money::zero());
        assert!(!handle(&mut ledger, id, money(1)).is_success());
    }
}
