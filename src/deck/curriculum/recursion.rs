use crate::deck::{Slide, Topic};

pub(super) const TOPIC: Topic = Topic {
    id: 2,
    name: "Recursion & Backtracking",
    duration: "1 hour",
    slides: SLIDES,
};

const SLIDES: &[Slide] = &[
    Slide::Title {
        title: "Recursion & Backtracking",
        subtitle: "Solving Problems with Self-Referential Functions",
        description: "Master the art of breaking down complex problems",
    },
    Slide::Content {
        title: "What is Recursion?",
        points: &[
            "A function that calls itself to solve smaller instances of the same problem",
            "Must have a base case (termination condition)",
            "Must have a recursive case (calls itself with modified input)",
            "Uses call stack for execution",
            "Useful for: Tree traversal, sorting, divide & conquer",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Recursion Components",
        points: &[
            "**Base Case**: Condition to stop recursion (prevents infinite loop)",
            "**Recursive Case**: Function calls itself with smaller problem",
            "**Return Statement**: Pass result back up the call stack",
            "**Progress**: Each call must move toward base case",
            "**Call Stack**: Stores function calls (can cause stack overflow)",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Simple Recursion - Factorial",
        description: Some("Classic example of recursion"),
        code: r#"// Calculate factorial using recursion
// n! = n × (n-1) × (n-2) × ... × 1

function factorial(n) {
  // Base case: factorial of 0 or 1 is 1
  if (n === 0 || n === 1) {
    return 1;
  }

  // Recursive case: n! = n × (n-1)!
  return n * factorial(n - 1);
}

// Example execution:
console.log(factorial(5));  // 120

// Call stack visualization:
// factorial(5) = 5 * factorial(4)
//              = 5 * 4 * factorial(3)
//              = 5 * 4 * 3 * factorial(2)
//              = 5 * 4 * 3 * 2 * factorial(1)
//              = 5 * 4 * 3 * 2 * 1
//              = 120

// Time: O(n), Space: O(n) - call stack"#,
    },
    Slide::Code {
        title: "Fibonacci Sequence",
        description: Some("Understanding recursion tree and optimization"),
        code: r#"// Naive recursive approach (inefficient)
function fibonacci(n) {
  // Base cases
  if (n <= 1) return n;

  // Recursive case
  return fibonacci(n - 1) + fibonacci(n - 2);
}

console.log(fibonacci(6));  // 8
// Time: O(2^n) - exponential!, Space: O(n)

// Optimized with Memoization (Dynamic Programming)
function fibMemo(n, memo = {}) {
  if (n <= 1) return n;
  if (memo[n]) return memo[n];

  memo[n] = fibMemo(n - 1, memo) + fibMemo(n - 2, memo);
  return memo[n];
}

console.log(fibMemo(50));  // Fast!
// Time: O(n), Space: O(n)"#,
    },
    Slide::Code {
        title: "Array Sum using Recursion",
        description: Some("Processing arrays recursively"),
        code: r#"// Calculate sum of array elements
function arraySum(arr, index = 0) {
  // Base case: reached end
  if (index >= arr.length) {
    return 0;
  }

  // Recursive case: current + sum of rest
  return arr[index] + arraySum(arr, index + 1);
}

// Alternative approach
function arraySum2(arr) {
  if (arr.length === 0) return 0;
  return arr[0] + arraySum2(arr.slice(1));
}

const numbers = [1, 2, 3, 4, 5];
console.log(arraySum(numbers));   // 15
console.log(arraySum2(numbers));  // 15

// Time: O(n), Space: O(n)"#,
    },
    Slide::Code {
        title: "String Reversal - Recursion",
        description: Some("Working with strings recursively"),
        code: r#"// Reverse a string using recursion
function reverseString(str) {
  // Base case: empty or single character
  if (str.length <= 1) {
    return str;
  }

  // Recursive case: last char + reverse of rest
  return str[str.length - 1] + reverseString(str.slice(0, -1));
}

console.log(reverseString("hello"));  // "olleh"

// Alternative: first char goes to end
function reverse2(str) {
  if (str === "") return "";
  return reverse2(str.substr(1)) + str[0];
}

console.log(reverse2("world"));  // "dlrow"

// Time: O(n), Space: O(n)"#,
    },
    Slide::Code {
        title: "Power Function - Recursion",
        description: Some("Calculate x^n efficiently"),
        code: r#"// Calculate x raised to power n
function power(x, n) {
  // Base case
  if (n === 0) return 1;
  if (n === 1) return x;

  // Recursive case
  return x * power(x, n - 1);
}

console.log(power(2, 5));  // 32
// Time: O(n)

// Optimized: Divide and Conquer
function powerOptimized(x, n) {
  if (n === 0) return 1;

  // If n is even: x^n = (x^(n/2))^2
  if (n % 2 === 0) {
    const half = powerOptimized(x, n / 2);
    return half * half;
  }

  // If n is odd: x^n = x * x^(n-1)
  return x * powerOptimized(x, n - 1);
}

console.log(powerOptimized(2, 10));  // 1024
// Time: O(log n)"#,
    },
    Slide::Content {
        title: "What is Backtracking?",
        points: &[
            "Algorithmic technique to find all (or some) solutions",
            "Tries all possibilities using recursion",
            "Abandons (backtracks) when a path doesn't work",
            "Uses DFS (Depth First Search) approach",
            "Common in: Puzzles, games, combinatorial problems",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Backtracking Template",
        points: &[
            "1. **Choose**: Make a choice from available options",
            "2. **Explore**: Recursively explore with that choice",
            "3. **Un-choose**: Backtrack if it doesn't lead to solution",
            "**Pruning**: Skip paths that can't lead to solution",
            "**State**: Maintain current state, restore when backtracking",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Generate All Subsets",
        description: Some("Power set using backtracking"),
        code: r#"// Generate all subsets of an array
function subsets(nums) {
  const result = [];
  const current = [];

  function backtrack(index) {
    // Add current subset to result
    result.push([...current]);

    // Try adding each remaining element
    for (let i = index; i < nums.length; i++) {
      current.push(nums[i]);      // Choose
      backtrack(i + 1);           // Explore
      current.pop();              // Un-choose (backtrack)
    }
  }

  backtrack(0);
  return result;
}

const nums = [1, 2, 3];
console.log(subsets(nums));
// Output: [[], [1], [1,2], [1,2,3], [1,3], [2], [2,3], [3]]

// Time: O(2^n), Space: O(n)"#,
    },
    Slide::Code {
        title: "Generate All Permutations",
        description: Some("All arrangements of elements"),
        code: r#"// Generate all permutations of array
function permutations(nums) {
  const result = [];

  function backtrack(current, remaining) {
    // Base case: no more elements to add
    if (remaining.length === 0) {
      result.push([...current]);
      return;
    }

    // Try each remaining element
    for (let i = 0; i < remaining.length; i++) {
      // Choose
      current.push(remaining[i]);

      // Explore with remaining elements
      const newRemaining = remaining.filter((_, idx) => idx !== i);
      backtrack(current, newRemaining);

      // Un-choose (backtrack)
      current.pop();
    }
  }

  backtrack([], nums);
  return result;
}

console.log(permutations([1, 2, 3]));
// [[1,2,3], [1,3,2], [2,1,3], [2,3,1], [3,1,2], [3,2,1]]

// Time: O(n!), Space: O(n)"#,
    },
    Slide::Code {
        title: "N-Queens Problem",
        description: Some("Classic backtracking problem"),
        code: r#"// Place N queens on N×N board (no attacks)
function solveNQueens(n) {
  const result = [];
  const board = Array(n).fill().map(() => Array(n).fill('.'));

  function isSafe(row, col) {
    // Check column
    for (let i = 0; i < row; i++) {
      if (board[i][col] === 'Q') return false;
    }

    // Check diagonal (top-left)
    for (let i = row - 1, j = col - 1; i >= 0 && j >= 0; i--, j--) {
      if (board[i][j] === 'Q') return false;
    }

    // Check diagonal (top-right)
    for (let i = row - 1, j = col + 1; i >= 0 && j < n; i--, j++) {
      if (board[i][j] === 'Q') return false;
    }

    return true;
  }

  function backtrack(row) {
    if (row === n) {
      result.push(board.map(r => r.join('')));
      return;
    }

    for (let col = 0; col < n; col++) {
      if (isSafe(row, col)) {
        board[row][col] = 'Q';      // Choose
        backtrack(row + 1);         // Explore
        board[row][col] = '.';      // Un-choose
      }
    }
  }

  backtrack(0);
  return result;
}

console.log(solveNQueens(4));  // 2 solutions"#,
    },
    Slide::Code {
        title: "Combination Sum",
        description: Some("Find combinations that sum to target"),
        code: r#"// Find all combinations that sum to target
function combinationSum(candidates, target) {
  const result = [];

  function backtrack(start, current, sum) {
    // Base case: found valid combination
    if (sum === target) {
      result.push([...current]);
      return;
    }

    // Pruning: sum exceeded target
    if (sum > target) return;

    for (let i = start; i < candidates.length; i++) {
      current.push(candidates[i]);              // Choose
      backtrack(i, current, sum + candidates[i]); // Explore (can reuse)
      current.pop();                            // Un-choose
    }
  }

  backtrack(0, [], 0);
  return result;
}

console.log(combinationSum([2, 3, 6, 7], 7));
// Output: [[2,2,3], [7]]

// Time: O(2^n), Space: O(target/min)"#,
    },
    Slide::Code {
        title: "Sudoku Solver",
        description: Some("Complete backtracking solution"),
        code: r#"// Solve 9x9 Sudoku puzzle
function solveSudoku(board) {
  function isValid(row, col, num) {
    // Check row
    for (let i = 0; i < 9; i++) {
      if (board[row][i] === num) return false;
    }

    // Check column
    for (let i = 0; i < 9; i++) {
      if (board[i][col] === num) return false;
    }

    // Check 3x3 box
    const startRow = Math.floor(row / 3) * 3;
    const startCol = Math.floor(col / 3) * 3;
    for (let i = 0; i < 3; i++) {
      for (let j = 0; j < 3; j++) {
        if (board[startRow + i][startCol + j] === num) {
          return false;
        }
      }
    }

    return true;
  }

  function solve() {
    for (let row = 0; row < 9; row++) {
      for (let col = 0; col < 9; col++) {
        if (board[row][col] === '.') {
          for (let num = 1; num <= 9; num++) {
            const char = num.toString();
            if (isValid(row, col, char)) {
              board[row][col] = char;    // Choose
              if (solve()) return true;  // Explore
              board[row][col] = '.';     // Backtrack
            }
          }
          return false;  // No valid number found
        }
      }
    }
    return true;  // Solved
  }

  solve();
  return board;
}"#,
    },
    Slide::Code {
        title: "Word Search in Grid",
        description: Some("Find word in 2D board"),
        code: r#"// Find if word exists in 2D grid
function wordSearch(board, word) {
  const rows = board.length;
  const cols = board[0].length;

  function backtrack(row, col, index) {
    // Base case: found complete word
    if (index === word.length) return true;

    // Boundary checks
    if (row < 0 || row >= rows || col < 0 || col >= cols) {
      return false;
    }

    // Check if current cell matches
    if (board[row][col] !== word[index]) return false;

    // Mark as visited
    const temp = board[row][col];
    board[row][col] = '#';

    // Explore all 4 directions
    const found =
      backtrack(row + 1, col, index + 1) ||  // Down
      backtrack(row - 1, col, index + 1) ||  // Up
      backtrack(row, col + 1, index + 1) ||  // Right
      backtrack(row, col - 1, index + 1);    // Left

    // Backtrack: restore cell
    board[row][col] = temp;

    return found;
  }

  // Try starting from each cell
  for (let i = 0; i < rows; i++) {
    for (let j = 0; j < cols; j++) {
      if (backtrack(i, j, 0)) return true;
    }
  }

  return false;
}

const board = [['A','B'],['C','D']];
console.log(wordSearch(board, "ABCD"));  // true"#,
    },
    Slide::Content {
        title: "Recursion vs Iteration",
        points: &[
            "**Recursion**: Cleaner code, natural for trees/graphs",
            "**Iteration**: Better performance, no stack overflow risk",
            "Every recursion can be converted to iteration",
            "Recursion uses more memory (call stack)",
            "Use recursion when problem is naturally recursive",
            "Use iteration for simple loops and better performance",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Time & Space Complexity",
        points: &[
            "**Factorial**: O(n) time, O(n) space",
            "**Fibonacci (naive)**: O(2^n) time, O(n) space",
            "**Fibonacci (memo)**: O(n) time, O(n) space",
            "**Subsets**: O(2^n) time, O(n) space",
            "**Permutations**: O(n!) time, O(n) space",
            "**N-Queens**: O(n!) time, O(n²) space",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Practice Problems",
        points: &[
            "1. Tower of Hanoi puzzle",
            "2. Generate valid parentheses",
            "3. Letter combinations of phone number",
            "4. Palindrome partitioning",
            "5. Rat in a maze problem",
            "6. Knight's tour problem",
            "7. Subset sum problem",
        ],
        diagram: false,
    },
];
