mod fortuna;
mod mt19937;
