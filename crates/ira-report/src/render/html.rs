//! Print-ready HTML renderer

use super::{DocumentRenderer, ReportFormat};
use crate::document::{EvidenceEntry, HypothesisEntry, ReportDocument};
use crate::error::RenderError;
use crate::sections::NbrRow;
use ira_faulttree::{Recommendation, TreeNodeView};
use ira_imaging::EmbeddedImage;
use ira_model::{CommissionAction, InvolvedPerson, NodeStatus, TimelineEvent};
use std::fmt::Write;

/// Placeholder for empty optional sections
pub const NONE_REGISTERED: &str = "Nenhum registro";

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;margin:2cm;color:#222}\
h1{font-size:20pt}h2{font-size:14pt;border-bottom:1px solid #999;page-break-after:avoid}\
table{border-collapse:collapse;width:100%}td,th{border:1px solid #bbb;padding:4px;text-align:left}\
.empty{color:#777;font-style:italic}.badge{font-weight:bold;margin-right:.5em}\
.node{padding:2px 6px;margin:2px 0;border-left:4px solid #fdd835}\
.node.basic-cause{border-color:#e53935}.node.contributing-cause{border-color:#fb8c00}\
.node.root{border-color:#263238}.node.intermediate-validated{border-color:#43a047}\
.node.discarded{border-color:#9e9e9e}.hypothesis{page-break-inside:avoid;margin-bottom:1em}\
img{max-width:100%}";

/// Escape text for HTML element and attribute content
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn status_label(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Pending => "Pendente",
        NodeStatus::Validated => "Validada",
        NodeStatus::Discarded => "Descartada",
    }
}

/// HTML renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        write_document(&mut out, document)?;
        Ok(out.into_bytes())
    }
}

fn write_document(out: &mut String, doc: &ReportDocument) -> Result<(), RenderError> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"pt-BR\">")?;
    writeln!(
        out,
        "<head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head>",
        escape_html(&doc.title)
    )?;
    writeln!(out, "<body>")?;
    writeln!(
        out,
        "<header><h1>{}</h1><p class=\"meta\">Relatório {} gerado em {}</p></header>",
        escape_html(&doc.title),
        doc.id,
        doc.generated_at.format("%d/%m/%Y %H:%M UTC")
    )?;

    write_accident(out, doc)?;
    write_people(out, "Condutores", &doc.people.drivers)?;
    write_people(out, "Vítimas", &doc.people.injured)?;
    write_people(out, "Testemunhas", &doc.people.witnesses)?;
    write_timeline(out, &doc.timeline)?;
    write_tree(out, &doc.tree)?;
    write_hypotheses(out, &doc.hypotheses)?;
    write_nbr_table(out, &doc.nbr_table)?;
    if !doc.recommendations.is_empty() {
        writeln!(out, "<section id=\"recomendacoes\"><h2>Recomendações</h2>")?;
        write_recommendations(out, "Causas básicas", &doc.recommendations.basic_causes)?;
        write_recommendations(
            out,
            "Causas contribuintes",
            &doc.recommendations.contributing_causes,
        )?;
        writeln!(out, "</section>")?;
    }
    write_evidence(out, &doc.evidence)?;
    write_actions(out, &doc.commission_actions)?;
    write_people(out, "Comissão de investigação", &doc.people.commission_members)?;

    writeln!(out, "</body>\n</html>")?;
    Ok(())
}

fn write_empty(out: &mut String) -> Result<(), RenderError> {
    writeln!(out, "<p class=\"empty\">{NONE_REGISTERED}</p>")?;
    Ok(())
}

fn write_field(out: &mut String, name: &str, value: Option<&str>) -> Result<(), RenderError> {
    let value = value.filter(|v| !v.trim().is_empty()).unwrap_or("-");
    writeln!(out, "<tr><th>{name}</th><td>{}</td></tr>", escape_html(value))?;
    Ok(())
}

fn write_image(out: &mut String, image: &EmbeddedImage, alt: &str) -> Result<(), RenderError> {
    write!(
        out,
        "<img src=\"{}\" alt=\"{}\"",
        escape_html(&image.data_uri),
        escape_html(alt)
    )?;
    if let (Some(width), Some(height)) = (image.width, image.height) {
        write!(out, " width=\"{width}\" height=\"{height}\"")?;
    }
    writeln!(out, ">")?;
    Ok(())
}

fn write_accident(out: &mut String, doc: &ReportDocument) -> Result<(), RenderError> {
    let accident = &doc.accident;
    writeln!(out, "<section id=\"acidente\"><h2>Dados do acidente</h2><table>")?;
    write_field(out, "Identificação", accident.id.as_deref())?;
    write_field(out, "Título", Some(accident.title.as_str()))?;
    write_field(out, "Data e hora", accident.occurred_at.as_deref())?;
    write_field(out, "Local", accident.location.as_deref())?;
    write_field(out, "Empresa", accident.company.as_deref())?;
    write_field(out, "Gravidade", accident.severity.as_deref())?;
    write_field(out, "Descrição", accident.description.as_deref())?;
    writeln!(out, "</table></section>")?;
    Ok(())
}

fn write_people(
    out: &mut String,
    heading: &str,
    people: &[InvolvedPerson],
) -> Result<(), RenderError> {
    writeln!(out, "<section><h2>{heading}</h2>")?;
    if people.is_empty() {
        write_empty(out)?;
    } else {
        writeln!(
            out,
            "<table><tr><th>Nome</th><th>Função</th><th>Empresa</th>\
             <th>Contato</th><th>Relato</th></tr>"
        )?;
        for person in people {
            writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&person.name),
                escape_html(person.role.as_deref().unwrap_or("-")),
                escape_html(person.company.as_deref().unwrap_or("-")),
                escape_html(person.contact.as_deref().unwrap_or("-")),
                escape_html(person.statement.as_deref().unwrap_or("-")),
            )?;
        }
        writeln!(out, "</table>")?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn write_timeline(out: &mut String, events: &[TimelineEvent]) -> Result<(), RenderError> {
    writeln!(out, "<section id=\"cronologia\"><h2>Cronologia</h2>")?;
    if events.is_empty() {
        write_empty(out)?;
    } else {
        writeln!(out, "<ol>")?;
        for event in events {
            writeln!(
                out,
                "<li><strong>{}</strong> {}</li>",
                escape_html(&event.timestamp),
                escape_html(&event.description)
            )?;
        }
        writeln!(out, "</ol>")?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn write_tree(out: &mut String, nodes: &[TreeNodeView]) -> Result<(), RenderError> {
    writeln!(out, "<section id=\"arvore\"><h2>Árvore de falhas</h2>")?;
    if nodes.is_empty() {
        write_empty(out)?;
    }
    for node in nodes {
        write!(
            out,
            "<div class=\"node {}\" style=\"margin-left:{}em\">",
            node.category,
            node.depth * 2
        )?;
        let badge = node.badge();
        if !badge.is_empty() {
            write!(out, "<span class=\"badge\">{badge}</span>")?;
        }
        writeln!(out, "{}</div>", escape_html(&node.display_label))?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn write_hypotheses(out: &mut String, hypotheses: &[HypothesisEntry]) -> Result<(), RenderError> {
    writeln!(out, "<section id=\"hipoteses\"><h2>Hipóteses</h2>")?;
    if hypotheses.is_empty() {
        write_empty(out)?;
    }
    for entry in hypotheses {
        let record = &entry.record;
        writeln!(out, "<div class=\"hypothesis\">")?;
        write!(out, "<h3>")?;
        let badge = record.number_label();
        if !badge.is_empty() {
            write!(out, "<span class=\"badge\">{badge}</span>")?;
        }
        writeln!(out, "{}</h3>", escape_html(&record.label))?;
        writeln!(out, "<p>Situação: {}</p>", status_label(record.status))?;
        if record.has_nbr_code() {
            writeln!(
                out,
                "<p>NBR 14280: {} {}</p>",
                escape_html(record.nbr_code.as_deref().unwrap_or_default()),
                escape_html(record.nbr_description.as_deref().unwrap_or_default())
            )?;
        }
        if let Some(text) = record.justification.as_deref().filter(|t| !t.trim().is_empty()) {
            writeln!(out, "<p>{}</p>", escape_html(text))?;
        }
        if let Some(image) = &entry.image {
            write_image(out, image, &record.label)?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn write_nbr_table(out: &mut String, rows: &[NbrRow]) -> Result<(), RenderError> {
    writeln!(out, "<section id=\"nbr\"><h2>Classificação NBR 14280</h2>")?;
    if rows.is_empty() {
        write_empty(out)?;
    } else {
        writeln!(out, "<table><tr><th>Causa</th><th>Código</th><th>Descrição</th></tr>")?;
        for row in rows {
            writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&row.label),
                escape_html(&row.code),
                escape_html(row.description.as_deref().unwrap_or("-"))
            )?;
        }
        writeln!(out, "</table>")?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn write_recommendations(
    out: &mut String,
    heading: &str,
    entries: &[Recommendation],
) -> Result<(), RenderError> {
    writeln!(out, "<h3>{heading}</h3>")?;
    if entries.is_empty() {
        return write_empty(out);
    }
    writeln!(out, "<table><tr><th>Causa</th><th>NBR</th><th>Recomendação</th></tr>")?;
    for entry in entries {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.label),
            escape_html(entry.nbr_code.as_deref().unwrap_or("-")),
            escape_html(&entry.recommendation)
        )?;
    }
    writeln!(out, "</table>")?;
    Ok(())
}

fn write_evidence(out: &mut String, evidence: &[EvidenceEntry]) -> Result<(), RenderError> {
    writeln!(out, "<section id=\"evidencias\"><h2>Evidências</h2>")?;
    if evidence.is_empty() {
        write_empty(out)?;
    }
    for item in evidence {
        writeln!(out, "<figure>")?;
        match (&item.image, &item.source) {
            (Some(image), _) => write_image(out, image, &item.description)?,
            (None, Some(_)) => writeln!(out, "<p class=\"empty\">Imagem indisponível</p>")?,
            (None, None) => {}
        }
        writeln!(out, "<figcaption>{}</figcaption></figure>", escape_html(&item.description))?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

fn write_actions(out: &mut String, actions: &[CommissionAction]) -> Result<(), RenderError> {
    writeln!(out, "<section id=\"acoes\"><h2>Ações da comissão</h2>")?;
    if actions.is_empty() {
        write_empty(out)?;
    } else {
        writeln!(out, "<table><tr><th>Data</th><th>Ação</th><th>Responsável</th></tr>")?;
        for action in actions {
            writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&action.timestamp),
                escape_html(&action.description),
                escape_html(action.responsible.as_deref().unwrap_or("-"))
            )?;
        }
        writeln!(out, "</table>")?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}
