//! Line-oriented transaction input and text report output.
//!
//! One transaction per line, items as whitespace-separated tokens.
//! Duplicate items within a line collapse into one; blank lines are
//! skipped. The report writer renders the two numbered sections the
//! demo binary prints: frequent itemsets with their support, then rules
//! with their confidence.

use std::io::{BufRead, Write};

use crate::itemset::Itemset;
use crate::mining::FrequentItemsetData;
use crate::rules::AssociationRule;

/// Transaction input errors.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read transactions: {0}")]
    Io(#[from] std::io::Error),
}

/// Read whitespace-delimited transactions, one per line.
///
/// Blank lines are skipped; duplicate tokens within a line collapse on
/// itemset construction.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Itemset<String>>, ReadError> {
    let mut transactions = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let transaction: Itemset<String> =
            line.split_whitespace().map(|s| s.to_string()).collect();
        if !transaction.is_empty() {
            transactions.push(transaction);
        }
    }

    Ok(transactions)
}

/// Write the frequent-itemset and association-rule report sections.
pub fn write_report<W: Write>(
    writer: &mut W,
    data: &FrequentItemsetData<String>,
    rules: &[AssociationRule<String>],
) -> std::io::Result<()> {
    writeln!(writer, "<------- Frequent itemsets ------->")?;
    for (i, itemset) in data.frequent_itemsets().iter().enumerate() {
        // Every listed itemset was counted during mining.
        let support = data.support(itemset).unwrap_or(0.0);
        writeln!(writer, "{:2}: {}, support: {:.3}", i + 1, itemset, support)?;
    }

    writeln!(writer)?;
    writeln!(writer, "<------- Association rules ------->")?;
    for (i, rule) in rules.iter().enumerate() {
        writeln!(
            writer,
            "{:2}: {} -> {}: {:.3}",
            i + 1,
            rule.antecedent(),
            rule.consequent(),
            rule.confidence()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::{FrequentItemsetMiner, MinerParams, Verbosity};
    use crate::rules::RuleGenerator;

    fn set(items: &[&str]) -> Itemset<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_one_transaction_per_line() {
        let input = "bread milk\nbread butter milk\n";
        let transactions = read_transactions(input.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0], set(&["bread", "milk"]));
        assert_eq!(transactions[1], set(&["bread", "butter", "milk"]));
    }

    #[test]
    fn skips_blank_lines_and_collapses_duplicates() {
        let input = "a a b\n\n   \nc\n";
        let transactions = read_transactions(input.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0], set(&["a", "b"]));
        assert_eq!(transactions[1], set(&["c"]));
    }

    #[test]
    fn empty_input_reads_no_transactions() {
        let transactions = read_transactions("".as_bytes()).unwrap();
        assert!(transactions.is_empty());
    }

    #[test]
    fn report_has_both_sections() {
        let transactions = vec![set(&["a", "b"]), set(&["a", "b"]), set(&["a"])];
        let data = FrequentItemsetMiner::new(MinerParams::silent())
            .mine(&transactions, 0.5)
            .unwrap()
            .unwrap();
        let rules = RuleGenerator::new(Verbosity::Silent)
            .mine_rules(&data, 0.5)
            .unwrap();

        let mut out = Vec::new();
        write_report(&mut out, &data, &rules).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("<------- Frequent itemsets ------->"));
        assert!(report.contains("<------- Association rules ------->"));
        assert!(report.contains("[a, b], support: 0.667"));
        assert!(report.contains("[b] -> [a]: 1.000"));
    }
}
