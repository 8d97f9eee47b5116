use leptos::prelude::*;

/// (capability, generic chatbot, Firmi)
const ROWS: [(&str, bool, bool); 5] = [
    ("Answers from your own documents", false, true),
    ("Cites the source of every answer", false, true),
    ("Runs tasks on a schedule", false, true),
    ("Builds slides and reports", true, true),
    ("General knowledge", true, true),
];

fn mark(supported: bool) -> &'static str {
    if supported { "✓" } else { "—" }
}

#[component]
pub fn ComparisonSection() -> impl IntoView {
    view! {
        <section class="comparison">
            <h2>"Why not just a chatbot?"</h2>
            <table>
                <thead>
                    <tr>
                        <th></th>
                        <th>"Generic chatbot"</th>
                        <th>"Firmi"</th>
                    </tr>
                </thead>
                <tbody>
                    {ROWS
                        .into_iter()
                        .map(|(capability, generic, firmi)| {
                            view! {
                                <tr>
                                    <td>{capability}</td>
                                    <td>{mark(generic)}</td>
                                    <td class="highlight">{mark(firmi)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
