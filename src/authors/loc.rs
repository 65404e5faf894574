use super::alphabetical::authors_alphabetical;
use crate::error::{GalError, Result};
use crate::git::{CommandRunner, GitRepo};
use crate::identity::{lines, Identity, RankedIdentity};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

/// Contributors ordered by lines added plus deleted in non-merge commits,
/// highest first.
pub fn authors_by_loc<R: CommandRunner>(repo: &GitRepo<R>, progress: bool) -> Result<Vec<String>> {
    let identities = authors_alphabetical(repo)?
        .iter()
        .map(|a| Identity::parse(a))
        .collect();
    let ranked = rank_by_loc(repo, identities, progress)?;
    Ok(ranked.into_iter().map(|r| r.identity.to_string()).collect())
}

/// Attach a modified-line total to each identity and sort descending.
///
/// The sort is stable, so identities with equal totals keep their input
/// order.
pub fn rank_by_loc<R: CommandRunner>(
    repo: &GitRepo<R>,
    identities: Vec<Identity>,
    progress: bool,
) -> Result<Vec<RankedIdentity>> {
    let pb = if progress {
        ProgressBar::new(identities.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message("Counting modified lines...");

    let mut ranked = Vec::with_capacity(identities.len());
    for identity in identities {
        let metric = if identity.has_email() {
            let total = sum_numstat(&repo.numstat_for(&identity.email)?)?;
            debug!("{identity}: {total} modified lines");
            total
        } else {
            warn!("'{identity}' has no email address, counting 0 modified lines");
            0
        };
        ranked.push(RankedIdentity { identity, metric });
        pb.inc(1);
    }
    pb.finish_and_clear();

    ranked.sort_by(|a, b| b.metric.cmp(&a.metric));
    Ok(ranked)
}

/// Sum added and deleted counts of `git log --numstat` output.
///
/// Lines that are not `added<TAB>deleted<TAB>path` are ignored. Binary files
/// report `-` for both counts and contribute nothing.
pub fn sum_numstat(output: &str) -> Result<u64> {
    let mut sum = 0;
    for line in lines(output) {
        let fields: Vec<&str> = line.splitn(3, '\t').collect();
        if let [added, deleted, _path] = fields[..] {
            sum += line_count(added, line)? + line_count(deleted, line)?;
        }
    }
    Ok(sum)
}

fn line_count(field: &str, line: &str) -> Result<u64> {
    if field == "-" {
        return Ok(0);
    }
    field.parse().map_err(|_| GalError::MalformedNumber {
        value: field.to_string(),
        line: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::repo::fake::{repo, FakeRunner};
    use pretty_assertions::assert_eq;

    const AUTHOR_LOG: &str = "git log --pretty=format:%an<%ae>";

    fn numstat(email: &str, branch: &str) -> String {
        format!("git log --fixed-strings --author=<{email}> --numstat --pretty= --no-merges {branch}")
    }

    #[test]
    fn sums_added_and_deleted() {
        let out = "10\t2\tsrc/lib.rs\n3\t0\tREADME.md\n\n1\t1\tdocs/a b.md\n";
        assert_eq!(sum_numstat(out).unwrap(), 17);
    }

    #[test]
    fn binary_files_count_as_zero() {
        assert_eq!(sum_numstat("-\t-\tlogo.png\n4\t1\tmain.rs\n").unwrap(), 5);
    }

    #[test]
    fn malformed_count_is_an_error() {
        match sum_numstat("x\t1\tsrc/lib.rs\n").unwrap_err() {
            GalError::MalformedNumber { value, line } => {
                assert_eq!(value, "x");
                assert_eq!(line, "x\t1\tsrc/lib.rs");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn larger_total_comes_first() {
        let r = repo(
            FakeRunner::new()
                .respond(AUTHOR_LOG, "Amy<amy@x.io>\nBen<ben@x.io>\nAmy<amy@x.io>\n")
                .respond(&numstat("amy@x.io", "main"), "30\t20\ta.rs\n")
                .respond(&numstat("ben@x.io", "main"), "60\t40\tb.rs\n"),
        );
        assert_eq!(
            authors_by_loc(&r, false).unwrap(),
            vec!["Ben<ben@x.io>", "Amy<amy@x.io>"]
        );
    }

    #[test]
    fn ties_keep_alphabetical_order() {
        let r = repo(
            FakeRunner::new()
                .respond(AUTHOR_LOG, "Cid<c@x.io>\nAmy<a@x.io>\n")
                .respond(&numstat("a@x.io", "main"), "1\t1\ta.rs\n")
                .respond(&numstat("c@x.io", "main"), "2\t0\tc.rs\n"),
        );
        assert_eq!(authors_by_loc(&r, false).unwrap(), vec!["Amy<a@x.io>", "Cid<c@x.io>"]);
    }

    #[test]
    fn ranks_carry_their_metric() {
        let r = repo(
            FakeRunner::new()
                .fail(&numstat("a@x.io", "main"), "unknown revision")
                .respond(&numstat("a@x.io", "master"), "5\t5\ta.rs\n"),
        );
        let ranked = rank_by_loc(&r, vec![Identity::parse("Amy<a@x.io>"), Identity::parse("ghost")], false)
            .unwrap();
        assert_eq!(ranked[0].metric, 10);
        assert_eq!(ranked[0].identity.to_string(), "Amy<a@x.io>");
        assert_eq!(ranked[1].metric, 0);
        assert_eq!(ranked[1].identity.to_string(), "ghost");
    }
}
