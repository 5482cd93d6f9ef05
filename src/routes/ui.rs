//! Embedded dashboard page.
//!
//! A single static HTML page that pulls everything it shows from
//! `/api/v1/dashboard`. No template engine and no asset pipeline; the
//! page ships inside the binary.

use axum::response::Html;

/// GET /, the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Engesud Smart - Dashboard 2030</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<style>
  :root {
    --bg: #0f1419;
    --card: #1a2129;
    --border: #2a3441;
    --text: #e6edf3;
    --muted: #8b949e;
    --accent: #4fc3f7;
    --good: #66bb6a;
    --warn: #ffa726;
    --bad: #ef5350;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body {
    background: var(--bg);
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    padding: 24px;
    max-width: 1100px;
    margin: 0 auto;
  }
  h1 { font-size: 1.5rem; margin-bottom: 4px; }
  .subtitle { color: var(--muted); margin-bottom: 20px; }
  .banner {
    display: none;
    border-radius: 8px;
    padding: 12px 16px;
    margin-bottom: 20px;
    border: 1px solid var(--border);
  }
  .banner.error { display: block; border-color: var(--bad); color: var(--bad); }
  .banner.warning { display: block; border-color: var(--warn); color: var(--warn); }
  .banner.info { display: block; border-color: var(--accent); color: var(--accent); }
  .tiles {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(190px, 1fr));
    gap: 12px;
    margin-bottom: 24px;
  }
  .tile {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 16px;
  }
  .tile .label { color: var(--muted); font-size: 0.8rem; margin-bottom: 6px; }
  .tile .value { font-size: 1.25rem; font-weight: 600; }
  .tile .delta { color: var(--good); font-size: 0.8rem; margin-top: 4px; }
  .section {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 16px;
    margin-bottom: 24px;
  }
  .section h2 { font-size: 1rem; margin-bottom: 12px; }
  .legend { color: var(--muted); font-size: 0.8rem; margin-top: 10px; }
  table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
  th, td { text-align: left; padding: 8px 10px; border-bottom: 1px solid var(--border); }
  th { color: var(--muted); font-weight: 500; }
  .actions { display: flex; gap: 10px; flex-wrap: wrap; margin-bottom: 24px; }
  button, .linkbtn {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 8px;
    color: var(--text);
    padding: 10px 14px;
    font-size: 0.85rem;
    cursor: pointer;
    text-decoration: none;
  }
  button:hover, .linkbtn:hover { border-color: var(--accent); }
  #toast {
    position: fixed;
    bottom: 24px;
    right: 24px;
    background: var(--card);
    border: 1px solid var(--accent);
    border-radius: 8px;
    padding: 10px 16px;
    display: none;
  }
  footer { color: var(--muted); font-size: 0.8rem; text-align: center; }
</style>
</head>
<body>
<h1>&#127970; Engesud Smart - Dashboard 2030</h1>
<div class="subtitle">Acompanhamento da esteira de neg&oacute;cios e da meta de R$ 20 milh&otilde;es</div>

<div id="banner" class="banner"></div>

<div class="tiles">
  <div class="tile"><div class="label">&#127919; Meta 2030</div><div class="value" id="tile-goal">-</div></div>
  <div class="tile"><div class="label">&#9989; Fechado</div><div class="value" id="tile-closed">-</div><div class="delta" id="tile-closed-count"></div></div>
  <div class="tile"><div class="label">&#128200; Potencial Estimado</div><div class="value" id="tile-potential">-</div></div>
  <div class="tile"><div class="label">&#9203; Restante</div><div class="value" id="tile-remaining">-</div><div class="delta" id="tile-pace"></div></div>
  <div class="tile"><div class="label">&#128176; Esteira em Aberto</div><div class="value" id="tile-open">-</div><div class="delta" id="tile-total-deals"></div></div>
</div>

<div class="section">
  <h2>&#128202; Projetos por Status</h2>
  <canvas id="status-chart" height="110"></canvas>
  <div class="legend">Entrada &middot; Em progresso &middot; Avan&ccedil;ado &middot; Standby &middot; Contratado</div>
</div>

<div class="section">
  <h2>&#128203; Projetos Recentes</h2>
  <table>
    <thead><tr><th>Neg&oacute;cio</th><th>Status</th><th>Cidade</th></tr></thead>
    <tbody id="deal-rows"><tr><td colspan="3">Carregando...</td></tr></tbody>
  </table>
</div>

<div class="actions">
  <button onclick="weeklyReport()">&#128196; Relat&oacute;rio Semanal</button>
  <button onclick="aiAnalysis()">&#129302; An&aacute;lise Kimi K2</button>
  <button onclick="refreshData()">&#128260; Atualizar Dados</button>
  <a class="linkbtn" href="https://www.notion.so/d342aea509974410b9f90ad4524fd596" target="_blank" rel="noopener">&#128279; Ver no Notion</a>
</div>

<footer id="footer">Engesud Smart | Meta: R$ 20.000.000 at&eacute; 2030</footer>
<div id="toast"></div>

<script>
const brl = new Intl.NumberFormat('pt-BR', {
  style: 'currency', currency: 'BRL', maximumFractionDigits: 0,
});
let statusChart = null;

function showBanner(kind, text) {
  const banner = document.getElementById('banner');
  banner.className = 'banner ' + kind;
  banner.textContent = text;
}

function hideBanner() {
  document.getElementById('banner').className = 'banner';
}

function toast(text) {
  const el = document.getElementById('toast');
  el.textContent = text;
  el.style.display = 'block';
  setTimeout(() => { el.style.display = 'none'; }, 2500);
}

function describeError(err) {
  if (!err) return 'Erro inesperado ao carregar o dashboard.';
  if (err.code === 'MISSING_CREDENTIAL') {
    return 'Token do Notion não configurado. Defina NOTION_TOKEN ou crie o arquivo .notion_token e reinicie o servidor.';
  }
  if (err.code === 'UPSTREAM_ERROR' || err.code === 'UPSTREAM_DECODE') {
    return 'Falha ao consultar o Notion: ' + err.message;
  }
  return err.message;
}

function renderChart(byStatus) {
  const labels = Object.keys(byStatus);
  const counts = labels.map((label) => byStatus[label]);
  if (statusChart) statusChart.destroy();
  statusChart = new Chart(document.getElementById('status-chart'), {
    type: 'bar',
    data: {
      labels: labels,
      datasets: [{
        label: 'Projetos',
        data: counts,
        backgroundColor: '#4fc3f7',
        borderRadius: 4,
      }],
    },
    options: {
      plugins: { legend: { display: false } },
      scales: {
        x: { ticks: { color: '#8b949e' }, grid: { display: false } },
        y: { ticks: { color: '#8b949e', precision: 0 }, grid: { color: '#2a3441' } },
      },
    },
  });
}

function renderTable(rows) {
  const body = document.getElementById('deal-rows');
  if (rows.length === 0) {
    body.innerHTML = '<tr><td colspan="3">Nenhum projeto para exibir.</td></tr>';
    return;
  }
  body.innerHTML = rows.map((row) => {
    const cells = [row.name, row.status, row.city]
      .map((cell) => '<td>' + escapeHtml(cell) + '</td>')
      .join('');
    return '<tr>' + cells + '</tr>';
  }).join('');
}

function escapeHtml(text) {
  const div = document.createElement('div');
  div.textContent = text;
  return div.innerHTML;
}

function render(view) {
  const m = view.metrics;
  document.getElementById('tile-goal').textContent = brl.format(view.goal_target);
  document.getElementById('tile-closed').textContent = brl.format(m.closed_value);
  document.getElementById('tile-closed-count').textContent = '+' + m.closed_count + ' projetos';
  document.getElementById('tile-potential').textContent = brl.format(m.potential_value);
  document.getElementById('tile-remaining').textContent = brl.format(m.remaining_to_goal);
  document.getElementById('tile-pace').textContent =
    m.years_remaining + ' anos | ' + brl.format(m.required_per_year) + '/ano';
  document.getElementById('tile-open').textContent = brl.format(m.open_value);
  document.getElementById('tile-total-deals').textContent = m.total_deals + ' projetos na esteira';

  renderChart(m.by_status);
  renderTable(view.recent_deals);

  if (m.total_deals === 0) {
    showBanner('info', 'Nenhum projeto encontrado nas bases do Notion.');
  } else {
    hideBanner();
  }

  const updated = new Date(view.generated_at).toLocaleString('pt-BR');
  document.getElementById('footer').textContent =
    'Engesud Smart | Meta: R$ 20.000.000 até 2030 | Atualizado em ' + updated;
}

async function loadDashboard() {
  try {
    const response = await fetch('/api/v1/dashboard');
    const envelope = await response.json();
    if (envelope.error) {
      const kind = envelope.error.code === 'MISSING_CREDENTIAL' ? 'warning' : 'error';
      showBanner(kind, describeError(envelope.error));
      renderTable([]);
      return;
    }
    render(envelope.data);
  } catch (err) {
    showBanner('error', 'Dashboard indisponível: ' + err.message);
  }
}

async function refreshData() {
  toast('Limpando cache e recarregando...');
  try {
    await fetch('/api/v1/cache/refresh', { method: 'POST' });
  } catch (err) {
    showBanner('error', 'Falha ao atualizar: ' + err.message);
    return;
  }
  await loadDashboard();
}

function weeklyReport() {
  toast('Geração de relatório semanal ainda não disponível.');
}

function aiAnalysis() {
  toast('Análise automática em breve. Use Atualizar Dados por enquanto.');
}

loadDashboard();
</script>
</body>
</html>
"##;
