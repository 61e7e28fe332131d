use crate::report::{ReportContext, SummaryInsight, format_f64_6};

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();

    out.push_str("Talent Match Report\n");
    out.push_str("===================\n\n");

    out.push_str(&format!(
        "Role: {} | Level: {}\n",
        ctx.role_name, ctx.job_level
    ));
    out.push_str(&format!("Purpose: {}\n", ctx.role_purpose));
    out.push_str(&format!("Benchmark employees: {}\n\n", ctx.benchmark_ids));

    out.push_str(&format!(
        "1. Top {} candidate matches (of {} ranked)\n",
        ctx.top.len(),
        ctx.n_ranked
    ));
    if ctx.top.is_empty() {
        out.push_str("No employee shares a pillar with the benchmark.\n");
    }
    for (i, m) in ctx.top.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {}\t{}\t{}\n",
            i + 1,
            m.employee_id,
            m.fullname,
            format_f64_6(m.match_rate)
        ));
    }
    out.push('\n');

    out.push_str("2. Match rate distribution\n");
    match ctx.stats {
        Some(s) => out.push_str(&format!(
            "min: {}\nmedian: {}\np90: {}\nmax: {}\n",
            format_f64_6(s.min),
            format_f64_6(s.median),
            format_f64_6(s.p90),
            format_f64_6(s.max)
        )),
        None => out.push_str("no match rates\n"),
    }
    for bin in ctx.histogram {
        out.push_str(&format!(
            "[{}, {}]\t{}\n",
            format_f64_6(bin.lower),
            format_f64_6(bin.upper),
            bin.count
        ));
    }
    out.push('\n');

    out.push_str("3. Competency comparison\n");
    match ctx.radar {
        Some(radar) => {
            out.push_str(&format!("Employee: {}\n", radar.employee_id));
            out.push_str("pillar\tbenchmark\temployee\n");
            for row in &radar.rows {
                out.push_str(&format!(
                    "{}\t{}\t{}\n",
                    row.pillar_label,
                    format_f64_6(row.benchmark),
                    format_f64_6(row.employee)
                ));
            }
        }
        None => out.push_str("No employee selected.\n"),
    }
    out.push('\n');

    out.push_str("4. Job profile\n");
    out.push_str(ctx.job_profile.trim_end());
    out.push_str("\n\n");

    out.push_str("5. Summary insight\n");
    match ctx.insight {
        Some(insight) => out.push_str(&insight_statement(insight)),
        None => out.push_str("No candidate could be ranked.\n"),
    }

    out
}

pub fn insight_statement(insight: &SummaryInsight) -> String {
    let mut out = format!(
        "The highest match is {} ({}) with a match rate of {:.2}.\n",
        insight.fullname, insight.employee_id, insight.match_rate
    );
    if !insight.closest_pillars.is_empty() {
        out.push_str(&format!(
            "Closest alignment with the benchmark on: {}.\n",
            insight.closest_pillars.join(", ")
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
