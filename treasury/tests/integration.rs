use token::tokens;
use treasury::{AccountBook, TreasuryPool};

#[test]
fn test_treasury_basic_flow() {
    let mut pool = TreasuryPool::new();
    let mut book = AccountBook::new();

    // Funder sends 100 ether-equivalent to the treasury.
    pool.deposit("funder", tokens(100)).unwrap();
    assert_eq!(pool.balance(), tokens(100));

    // Governance pays a grant out.
    pool.disburse("builder", tokens(40), &mut book).unwrap();

    assert_eq!(pool.balance(), tokens(60));
    assert_eq!(book.balance_of("builder"), tokens(40));
    assert_eq!(
        pool.balance(),
        pool.total_deposited() - pool.total_disbursed()
    );
}

#[test]
fn test_deposits_from_many_senders() {
    let mut pool = TreasuryPool::new();

    for i in 0..10 {
        pool.deposit(&format!("funder-{i}"), tokens(10)).unwrap();
    }

    assert_eq!(pool.balance(), tokens(100));
    assert_eq!(pool.transactions().len(), 10);
}
